//! Tabula - a row interaction state engine for data grid views.
//!
//! This is the main umbrella crate that re-exports all public APIs.
//!
//! A [`model::RowStateModel`] tracks the per-row interaction state behind one
//! data table: which rows are selected, expanded, disabled, focused, and
//! style-overridden. Derived counters stay consistent under any sequence of
//! bulk and single-row operations, and keyboard focus traversal wraps around
//! in both directions. Views subscribe to the model's signals and re-render
//! on change.
//!
//! # Example
//!
//! ```
//! use tabula::model::{FocusDirection, RowStateModel};
//!
//! let mut table: RowStateModel = RowStateModel::new();
//! table.set_rows(["a", "b", "c"]);
//!
//! table.signals().selection_changed.connect(|&count| {
//!     println!("{count} rows selected");
//! });
//!
//! table.toggle_selected("b");
//! table.set_focus(FocusDirection::Down);
//! assert_eq!(table.number_selected(), 1);
//! ```

pub use tabula_core::*;

pub mod model;
pub mod prelude;
