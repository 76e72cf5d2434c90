//! The row state engine.
//!
//! This module provides [`RowStateModel`], the per-table container of row
//! interaction state. A table-owning view creates one model per mount, feeds
//! it the current row ids whenever the underlying dataset changes, and row or
//! header UI elements call the mutating operations in response to user input.
//! Any UI fragment that needs to reflect state (a checkbox, a highlighted
//! row, an expand icon) subscribes through [`RowStateModel::signals`] or
//! registers a projection with [`RowStateModel::watch`].
//!
//! # Example
//!
//! ```
//! use tabula::model::RowStateModel;
//!
//! let mut table: RowStateModel = RowStateModel::new();
//! table.set_rows(["a", "b", "c"]);
//!
//! // Header checkbox drives the tri-state bulk toggle
//! table.toggle_all();
//! assert_eq!(table.number_selected(), 3);
//!
//! // A refresh keeps selection but drops expansion and focus
//! table.set_rows(["b", "c"]);
//! assert_eq!(table.number_selected(), 2);
//! assert_eq!(table.number_expanded(), 0);
//! ```

use std::collections::HashMap;

use parking_lot::Mutex;
use tabula_core::{ConnectionId, Property, Signal};

use super::row::{CheckState, FocusDirection, RowState, RowStyle};

/// An owned copy of the whole current state of a [`RowStateModel`].
///
/// Snapshots are handed to `state_changed` subscribers and to `watch`
/// selectors, so a slot never needs a re-entrant read of the model while a
/// mutation is settling.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSnapshot<S = ()> {
    /// Row records keyed by row id.
    pub rows: HashMap<String, RowState<S>>,
    /// Count of rows with `is_selected` set.
    pub number_selected: usize,
    /// Count of rows with `is_expanded` set.
    pub number_expanded: usize,
    /// The grouping display-mode flag.
    pub is_grouped: bool,
}

impl<S> TableSnapshot<S> {
    /// Looks up the record for a row id.
    pub fn row(&self, id: &str) -> Option<&RowState<S>> {
        self.rows.get(id)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The id of the focused row, if any.
    pub fn focused_id(&self) -> Option<&str> {
        self.rows
            .iter()
            .find(|(_, row)| row.is_focused)
            .map(|(id, _)| id.as_str())
    }

    /// Ids of the selected rows, in display (index) order.
    pub fn selected_ids(&self) -> Vec<String> {
        ids_where(&self.rows, |row| row.is_selected)
    }
}

/// Collection of signals emitted by a [`RowStateModel`].
///
/// Subscribers connect to these to stay synchronized with the model. Every
/// signal fires synchronously, after the mutation has fully settled.
pub struct RowStateSignals<S = ()> {
    /// Emitted after any mutation that changed state, with a snapshot of the
    /// settled state. No-op calls (unknown ids, bulk operations on an empty
    /// table) do not fire it.
    pub state_changed: Signal<TableSnapshot<S>>,

    /// Emitted when a toggle changes the selected count. Arg: new count.
    /// Not emitted by `set_rows`; subscribe to `rows_reset` for rebuilds.
    pub selection_changed: Signal<usize>,

    /// Emitted when a toggle changes the expanded count. Arg: new count.
    /// Not emitted by `set_rows`; subscribe to `rows_reset` for rebuilds.
    pub expansion_changed: Signal<usize>,

    /// Emitted when keyboard focus moves. Args: (new, old) row ids.
    pub focus_changed: Signal<(Option<String>, Option<String>)>,

    /// Emitted after the row set has been rebuilt. Arg: new row count.
    pub rows_reset: Signal<usize>,

    /// Emitted when the grouping flag actually changes. Arg: new value.
    pub grouping_changed: Signal<bool>,
}

impl<S: RowStyle> RowStateSignals<S> {
    /// Creates a new set of model signals.
    pub fn new() -> Self {
        Self {
            state_changed: Signal::new(),
            selection_changed: Signal::new(),
            expansion_changed: Signal::new(),
            focus_changed: Signal::new(),
            rows_reset: Signal::new(),
            grouping_changed: Signal::new(),
        }
    }
}

impl<S: RowStyle> Default for RowStateSignals<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// The row interaction state engine for one table instance.
///
/// `RowStateModel` holds one [`RowState`] record per row id plus two derived
/// counters. The counters are maintained incrementally and never diverge
/// from the per-row flags - that is the central invariant of the engine.
///
/// `set_rows` is the only operation that adds or removes row ids (and the
/// sole writer of `index`); every other operation mutates existing records
/// in place. Single-row operations on unknown ids are defensive no-ops that
/// leave the counters untouched.
///
/// # Signals
///
/// See [`RowStateSignals`]. The generic `state_changed` signal fires after
/// every effective mutation; the granular signals carry the changed value.
///
/// # Style Payload
///
/// The `S` parameter is an opaque per-row style override (see [`RowStyle`]).
/// Tables without style overlays use the default `()`.
pub struct RowStateModel<S: RowStyle = ()> {
    /// Row records keyed by row id.
    rows: HashMap<String, RowState<S>>,

    /// Count of rows with `is_selected` set.
    number_selected: usize,

    /// Count of rows with `is_expanded` set.
    number_expanded: usize,

    /// Orthogonal display-mode flag, independent of row records.
    is_grouped: Property<bool>,

    /// Signals emitted after mutations.
    signals: RowStateSignals<S>,
}

impl<S: RowStyle> Default for RowStateModel<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RowStyle> RowStateModel<S> {
    /// Creates a new, empty model.
    ///
    /// One model is created per table mount and discarded when the owning
    /// table unmounts; instances are never shared between tables.
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
            number_selected: 0,
            number_expanded: 0,
            is_grouped: Property::new(false),
            signals: RowStateSignals::new(),
        }
    }

    /// The signals for this model.
    ///
    /// Views connect to these to receive notifications about state changes.
    pub fn signals(&self) -> &RowStateSignals<S> {
        &self.signals
    }

    // =========================================================================
    // Row Lifecycle
    // =========================================================================

    /// Rebuilds the row map from the given ids, in order.
    ///
    /// Called whenever the caller's underlying dataset (post filter, sort,
    /// paginate) changes. For each id, the previous selection, disabled flag
    /// and style carry over if the id existed before; expansion and focus are
    /// unconditionally reset, since a refresh may have shifted row positions.
    /// Ids no longer present are dropped. `index` is assigned from the id's
    /// position in the sequence.
    ///
    /// Duplicate ids keep their first occurrence so that indices stay
    /// contiguous.
    pub fn set_rows<I>(&mut self, ids: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let previous = std::mem::take(&mut self.rows);
        let mut rows: HashMap<String, RowState<S>> = HashMap::new();

        for id in ids {
            let id = id.into();
            if rows.contains_key(&id) {
                tracing::debug!(target: "tabula::row_state", %id, "duplicate row id in set_rows");
                continue;
            }
            let index = rows.len();
            let state = match previous.get(&id) {
                Some(prev) => RowState {
                    is_selected: prev.is_selected,
                    is_disabled: prev.is_disabled,
                    style: prev.style.clone(),
                    is_expanded: false,
                    is_focused: false,
                    index,
                },
                None => RowState {
                    index,
                    ..RowState::default()
                },
            };
            rows.insert(id, state);
        }

        self.number_selected = rows.values().filter(|row| row.is_selected).count();
        self.number_expanded = 0;
        self.rows = rows;

        self.signals.rows_reset.emit(self.rows.len());
        self.emit_state_changed();
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up the record for a row id.
    pub fn row(&self, id: &str) -> Option<&RowState<S>> {
        self.rows.get(id)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Flips `is_selected` for exactly one row.
    ///
    /// Returns `false` (and changes nothing) if the id is unknown - the model
    /// never creates a phantom record for a caller error.
    pub fn toggle_selected(&mut self, id: &str) -> bool {
        let Some(row) = self.rows.get_mut(id) else {
            tracing::debug!(target: "tabula::row_state", %id, "toggle_selected on unknown row id");
            return false;
        };
        row.is_selected = !row.is_selected;
        if row.is_selected {
            self.number_selected += 1;
        } else {
            self.number_selected -= 1;
        }
        self.signals.selection_changed.emit(self.number_selected);
        self.emit_state_changed();
        true
    }

    /// Tri-state bulk toggle driven by the header checkbox.
    ///
    /// If not every row is selected, selects all rows; otherwise deselects
    /// all. There is no partial third state - an indeterminate selection
    /// always resolves to all-selected. No-op on an empty table.
    pub fn toggle_all(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let select = self.number_selected != self.rows.len();
        for row in self.rows.values_mut() {
            row.is_selected = select;
        }
        self.number_selected = if select { self.rows.len() } else { 0 };
        self.signals.selection_changed.emit(self.number_selected);
        self.emit_state_changed();
    }

    /// Deselects every row.
    ///
    /// Used after a bulk action completes. No-op when nothing is selected.
    pub fn clear_selected(&mut self) {
        if self.number_selected == 0 {
            return;
        }
        for row in self.rows.values_mut() {
            row.is_selected = false;
        }
        self.number_selected = 0;
        self.signals.selection_changed.emit(0);
        self.emit_state_changed();
    }

    /// Count of selected rows.
    pub fn number_selected(&self) -> usize {
        self.number_selected
    }

    /// Ids of the selected rows, in display (index) order.
    pub fn selected_ids(&self) -> Vec<String> {
        ids_where(&self.rows, |row| row.is_selected)
    }

    /// Header checkbox state for the selection column.
    pub fn select_check_state(&self) -> CheckState {
        CheckState::from_counts(self.number_selected, self.rows.len())
    }

    // =========================================================================
    // Expansion
    // =========================================================================

    /// Flips `is_expanded` for exactly one row.
    ///
    /// Returns `false` (and changes nothing) if the id is unknown.
    pub fn toggle_expanded(&mut self, id: &str) -> bool {
        let Some(row) = self.rows.get_mut(id) else {
            tracing::debug!(target: "tabula::row_state", %id, "toggle_expanded on unknown row id");
            return false;
        };
        row.is_expanded = !row.is_expanded;
        if row.is_expanded {
            self.number_expanded += 1;
        } else {
            self.number_expanded -= 1;
        }
        self.signals.expansion_changed.emit(self.number_expanded);
        self.emit_state_changed();
        true
    }

    /// Bulk expansion toggle; mirrors [`toggle_all`](Self::toggle_all) on
    /// `is_expanded`.
    pub fn toggle_all_expanded(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let expand = self.number_expanded != self.rows.len();
        for row in self.rows.values_mut() {
            row.is_expanded = expand;
        }
        self.number_expanded = if expand { self.rows.len() } else { 0 };
        self.signals.expansion_changed.emit(self.number_expanded);
        self.emit_state_changed();
    }

    /// Count of expanded rows.
    pub fn number_expanded(&self) -> usize {
        self.number_expanded
    }

    /// Ids of the expanded rows, in display (index) order.
    pub fn expanded_ids(&self) -> Vec<String> {
        ids_where(&self.rows, |row| row.is_expanded)
    }

    /// Header state for the expand-all control.
    pub fn expand_check_state(&self) -> CheckState {
        CheckState::from_counts(self.number_expanded, self.rows.len())
    }

    // =========================================================================
    // Disabled Rows & Style Overlays
    // =========================================================================

    /// Replaces the disabled set.
    ///
    /// Clears `is_disabled` on every row, then sets it for the ids supplied.
    /// This is a full replace, not an additive union - callers pass the
    /// complete disabled set each time. Unknown ids are ignored.
    ///
    /// Disabled is a gating flag for the UI layer; the model itself still
    /// accepts toggles on disabled rows.
    pub fn set_disabled_rows<I>(&mut self, ids: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for row in self.rows.values_mut() {
            row.is_disabled = false;
        }
        for id in ids {
            match self.rows.get_mut(id.as_ref()) {
                Some(row) => row.is_disabled = true,
                None => {
                    tracing::debug!(target: "tabula::row_state", id = id.as_ref(), "set_disabled_rows on unknown row id");
                }
            }
        }
        self.emit_state_changed();
    }

    /// Sets the style payload for one row, leaving all others untouched.
    ///
    /// Returns `false` (and changes nothing) if the id is unknown.
    pub fn set_row_style(&mut self, id: &str, style: S) -> bool {
        let Some(row) = self.rows.get_mut(id) else {
            tracing::debug!(target: "tabula::row_state", %id, "set_row_style on unknown row id");
            return false;
        };
        if row.style != style {
            row.style = style;
            self.emit_state_changed();
        }
        true
    }

    /// Applies a style to a set of rows.
    ///
    /// With `reset`, every row's style is first cleared to the default, so
    /// the listed ids end up as the only styled rows. Without it, only the
    /// listed ids are touched and all other rows keep their current style -
    /// a layered highlight on top of existing styling.
    pub fn set_row_styles<I>(&mut self, ids: I, style: S, reset: bool)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if reset {
            for row in self.rows.values_mut() {
                row.style = S::default();
            }
        }
        for id in ids {
            if let Some(row) = self.rows.get_mut(id.as_ref()) {
                row.style = style.clone();
            }
        }
        self.emit_state_changed();
    }

    // =========================================================================
    // Focus Navigation
    // =========================================================================

    /// Moves keyboard focus one row up or down, wrapping around.
    ///
    /// With no current focus, `Down` focuses the first row and `Up` focuses
    /// the last. No-op on an empty table. After any successful call exactly
    /// one row is focused.
    pub fn set_focus(&mut self, direction: FocusDirection) {
        if self.rows.is_empty() {
            return;
        }
        let len = self.rows.len();
        let current = self
            .rows
            .iter()
            .find(|(_, row)| row.is_focused)
            .map(|(id, row)| (id.clone(), row.index));

        let next_index = match (&current, direction) {
            (Some((_, index)), FocusDirection::Down) => (index + 1) % len,
            (Some((_, index)), FocusDirection::Up) => (index + len - 1) % len,
            (None, FocusDirection::Down) => 0,
            (None, FocusDirection::Up) => len - 1,
        };

        // Indices are assigned contiguously by set_rows, so the lookup
        // succeeds for any non-empty row set.
        let Some(next_id) = self
            .rows
            .iter()
            .find(|(_, row)| row.index == next_index)
            .map(|(id, _)| id.clone())
        else {
            return;
        };

        let old_id = current.map(|(id, _)| id);
        if let Some(id) = &old_id {
            if let Some(row) = self.rows.get_mut(id) {
                row.is_focused = false;
            }
        }
        if let Some(row) = self.rows.get_mut(&next_id) {
            row.is_focused = true;
        }

        self.signals.focus_changed.emit((Some(next_id), old_id));
        self.emit_state_changed();
    }

    /// The id of the focused row, if any.
    pub fn focused_id(&self) -> Option<&str> {
        self.rows
            .iter()
            .find(|(_, row)| row.is_focused)
            .map(|(id, _)| id.as_str())
    }

    // =========================================================================
    // Grouping
    // =========================================================================

    /// The grouping display-mode flag.
    pub fn is_grouped(&self) -> bool {
        self.is_grouped.get()
    }

    /// Sets the grouping flag. Emits only on an actual change.
    pub fn set_is_grouped(&mut self, grouped: bool) {
        if self.is_grouped.set(grouped) {
            self.signals.grouping_changed.emit(grouped);
            self.emit_state_changed();
        }
    }

    // =========================================================================
    // Read Path & Subscriptions
    // =========================================================================

    /// An owned copy of the whole current state.
    pub fn snapshot(&self) -> TableSnapshot<S> {
        TableSnapshot {
            rows: self.rows.clone(),
            number_selected: self.number_selected,
            number_expanded: self.number_expanded,
            is_grouped: self.is_grouped.get(),
        }
    }

    /// Registers a projection of the state.
    ///
    /// The selector runs against the settled snapshot after every effective
    /// mutation; the slot is invoked only when the projected value differs
    /// from the previous one (`PartialEq`), so a checkbox watching one row
    /// does not re-render when an unrelated row changes.
    ///
    /// The projection is seeded with the current value at registration time;
    /// the slot does not fire until the value first changes.
    ///
    /// Returns a `ConnectionId` for [`unwatch`](Self::unwatch).
    ///
    /// # Example
    ///
    /// ```
    /// use tabula::model::RowStateModel;
    ///
    /// let mut table: RowStateModel = RowStateModel::new();
    /// table.set_rows(["a", "b"]);
    ///
    /// let conn = table.watch(
    ///     |snapshot| snapshot.number_selected,
    ///     |&count| println!("selected: {count}"),
    /// );
    ///
    /// table.toggle_selected("a"); // slot fires: selected count changed
    /// table.toggle_expanded("a"); // slot does not fire
    /// table.unwatch(conn);
    /// ```
    pub fn watch<T, Sel, F>(&self, selector: Sel, slot: F) -> ConnectionId
    where
        T: PartialEq + Send + 'static,
        Sel: Fn(&TableSnapshot<S>) -> T + Send + Sync + 'static,
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.watch_with(selector, |a, b| a == b, slot)
    }

    /// Like [`watch`](Self::watch), but with a caller-supplied equality
    /// function for projections without a usable `PartialEq`.
    pub fn watch_with<T, Sel, E, F>(&self, selector: Sel, eq: E, slot: F) -> ConnectionId
    where
        T: Send + 'static,
        Sel: Fn(&TableSnapshot<S>) -> T + Send + Sync + 'static,
        E: Fn(&T, &T) -> bool + Send + Sync + 'static,
        F: Fn(&T) + Send + Sync + 'static,
    {
        let last = Mutex::new(selector(&self.snapshot()));
        self.signals.state_changed.connect(move |snapshot| {
            let value = selector(snapshot);
            let mut last = last.lock();
            if !eq(&last, &value) {
                slot(&value);
                *last = value;
            }
        })
    }

    /// Removes a projection registered with `watch`/`watch_with`.
    pub fn unwatch(&self, id: ConnectionId) -> bool {
        self.signals.state_changed.disconnect(id)
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn emit_state_changed(&self) {
        // The snapshot clone is skipped entirely when nothing listens.
        if self.signals.state_changed.connection_count() > 0 {
            self.signals.state_changed.emit(self.snapshot());
        }
    }
}

/// Ids of rows matching the predicate, in display (index) order.
fn ids_where<S>(
    rows: &HashMap<String, RowState<S>>,
    pred: impl Fn(&RowState<S>) -> bool,
) -> Vec<String> {
    let mut matching: Vec<(usize, &String)> = rows
        .iter()
        .filter(|(_, row)| pred(row))
        .map(|(id, row)| (row.index, id))
        .collect();
    matching.sort_unstable_by_key(|(index, _)| *index);
    matching.into_iter().map(|(_, id)| id.clone()).collect()
}

static_assertions::assert_impl_all!(RowStateModel: Send, Sync);
