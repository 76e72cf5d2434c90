//! Core systems for Tabula.
//!
//! This crate provides the foundational reactive primitives used by the
//! Tabula model layer:
//!
//! - **Signal/Slot System**: Type-safe change notification with explicit
//!   connect/disconnect lifecycle
//! - **Property System**: Value cells with `PartialEq`-based change detection
//!
//! Everything here is synchronous: emitting a signal invokes every connected
//! slot before `emit` returns. There is no event loop and no deferred
//! delivery; the model layer mutates on a single UI thread and subscribers
//! observe a fully-settled state.
//!
//! # Signal/Slot Example
//!
//! ```
//! use tabula_core::Signal;
//!
//! // Create a signal that notifies when a count changes
//! let count_changed = Signal::<usize>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = count_changed.connect(|count| {
//!     println!("Count changed to: {}", count);
//! });
//!
//! // Emit the signal
//! count_changed.emit(3);
//!
//! // Disconnect when done
//! count_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use tabula_core::{Property, Signal};
//!
//! // A reactive flag with change notification
//! struct Grouping {
//!     enabled: Property<bool>,
//!     changed: Signal<bool>,
//! }
//!
//! impl Grouping {
//!     fn set_enabled(&self, enabled: bool) {
//!         if self.enabled.set(enabled) {
//!             self.changed.emit(enabled);
//!         }
//!     }
//! }
//! ```

pub mod property;
pub mod signal;

pub use property::{Property, ReadOnlyProperty};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
