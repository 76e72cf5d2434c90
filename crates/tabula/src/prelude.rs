//! Prelude module for Tabula.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use tabula::prelude::*;
//! ```
//!
//! This provides access to:
//! - The row state engine (`RowStateModel`, `RowStateSignals`, `TableSnapshot`)
//! - Row record types (`RowState`, `CheckState`, `FocusDirection`)
//! - Signal/slot system (`Signal`, `ConnectionId`, `Property`)

// ============================================================================
// Model Layer
// ============================================================================

pub use crate::model::{
    CheckState, FocusDirection, RowState, RowStateModel, RowStateSignals, RowStyle, TableSnapshot,
};

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use crate::property::{Property, ReadOnlyProperty};
pub use crate::signal::{ConnectionGuard, ConnectionId, Signal};
