//! Per-row record types for the row state engine.
//!
//! A [`RowState`] is the interaction record kept for one row id. It carries
//! no cell data - columns and values live with the view's data source - only
//! the interaction flags a grid needs to paint checkboxes, detail panels,
//! and the keyboard cursor.

/// Marker for opaque style payloads attachable to a row.
///
/// The engine never inspects a style; it only stores, replaces, and resets
/// it. Any cheap value type qualifies - a color, a small struct of visual
/// overrides, or `()` when a table has no style overlays.
///
/// This trait is blanket-implemented; there is nothing to implement by hand.
pub trait RowStyle: Clone + Default + PartialEq + Send + Sync + 'static {}

impl<T> RowStyle for T where T: Clone + Default + PartialEq + Send + Sync + 'static {}

/// Interaction state for a single row.
///
/// One record exists per row id in a [`super::RowStateModel`]. All fields
/// default to off; `index` is assigned by `set_rows` and defines the focus
/// traversal order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowState<S = ()> {
    /// Row is marked for a bulk action.
    pub is_selected: bool,
    /// Row has an open detail/sub-row panel.
    pub is_expanded: bool,
    /// Row rejects selection/expansion in the UI (placeholder or locked
    /// record). The engine itself does not enforce the rejection.
    pub is_disabled: bool,
    /// Row is the current keyboard-navigation target. At most one record in
    /// the whole engine has this set.
    pub is_focused: bool,
    /// Ordinal position assigned by the last `set_rows` call.
    pub index: usize,
    /// Visual override attached to the row.
    pub style: S,
}

/// Direction for keyboard focus traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusDirection {
    /// Move focus to the previous row, wrapping to the last.
    Up,
    /// Move focus to the next row, wrapping to the first.
    Down,
}

/// Checkbox state for header checkboxes (unchecked, checked, partial).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckState {
    /// No rows are checked.
    #[default]
    Unchecked,
    /// Some but not all rows are checked (for tri-state checkboxes).
    PartiallyChecked,
    /// All rows are checked.
    Checked,
}

impl CheckState {
    /// Derives the header checkbox state from a checked count and a total.
    ///
    /// An empty table reads as `Unchecked`.
    pub fn from_counts(checked: usize, total: usize) -> Self {
        if total == 0 || checked == 0 {
            CheckState::Unchecked
        } else if checked == total {
            CheckState::Checked
        } else {
            CheckState::PartiallyChecked
        }
    }

    /// Returns true if fully or partially checked.
    pub fn is_checked(&self) -> bool {
        !matches!(self, CheckState::Unchecked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_state_default() {
        let row: RowState = RowState::default();
        assert!(!row.is_selected);
        assert!(!row.is_expanded);
        assert!(!row.is_disabled);
        assert!(!row.is_focused);
        assert_eq!(row.index, 0);
    }

    #[test]
    fn test_check_state_from_counts() {
        assert_eq!(CheckState::from_counts(0, 0), CheckState::Unchecked);
        assert_eq!(CheckState::from_counts(0, 3), CheckState::Unchecked);
        assert_eq!(CheckState::from_counts(1, 3), CheckState::PartiallyChecked);
        assert_eq!(CheckState::from_counts(3, 3), CheckState::Checked);
    }

    #[test]
    fn test_check_state_is_checked() {
        assert!(!CheckState::Unchecked.is_checked());
        assert!(CheckState::PartiallyChecked.is_checked());
        assert!(CheckState::Checked.is_checked());
    }
}
