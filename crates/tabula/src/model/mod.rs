//! Row interaction state for table views.
//!
//! This module provides the state engine behind a data grid: one
//! [`RowStateModel`] per mounted table, holding a [`RowState`] record per
//! row id plus the derived selection and expansion counters. This enables:
//!
//! - Consistent bulk and single-row toggles (the counters never diverge
//!   from the per-row flags)
//! - Keyboard focus traversal with wraparound
//! - Disabled-row and style-overlay bookkeeping
//! - Change notification through signals and selector-based projections
//!
//! # Core Types
//!
//! - `RowStateModel`: the engine - one instance per table
//! - `RowState`: per-row interaction record (selected/expanded/disabled/focused/style)
//! - `RowStateSignals`: signal bundle emitted after mutations
//! - `TableSnapshot`: an owned copy of the whole current state
//! - `CheckState`: tri-state derivation for header checkboxes
//!
//! # Example
//!
//! ```
//! use tabula::model::{CheckState, FocusDirection, RowStateModel};
//!
//! let mut table: RowStateModel = RowStateModel::new();
//! table.set_rows(["a", "b", "c"]);
//!
//! // Toggle a row and read the derived count
//! table.toggle_selected("a");
//! assert_eq!(table.number_selected(), 1);
//! assert_eq!(table.select_check_state(), CheckState::PartiallyChecked);
//!
//! // Focus walks in index order and wraps around
//! table.set_focus(FocusDirection::Up);
//! assert_eq!(table.focused_id(), Some("c"));
//!
//! // Watch a projection; the slot fires only when the value changes
//! let conn = table.watch(|s| s.number_selected, |&n| println!("{n} selected"));
//! table.toggle_all();
//! table.unwatch(conn);
//! ```

mod row;
mod row_state;

pub use row::{CheckState, FocusDirection, RowState, RowStyle};
pub use row_state::{RowStateModel, RowStateSignals, TableSnapshot};
