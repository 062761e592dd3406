//! Selector state algebra: the message set and the immutable model.
//!
//! These types define the widget's entire state space. The transition
//! function (`update`) and the rendering layer (`view`) both program
//! against them; neither performs I/O on its own.

use crate::mvu::{Message, Model};

/// Grid divisor: rows and columns are derived from a linear index by this
/// constant. One display row holds this many cells.
pub const ITEMS_PER_COLUMN: usize = 4;

/// Fixed width of one grid cell, in display cells.
pub const COLUMN_WIDTH: usize = 20;

/// The selector's closed message set. Tag-only, no payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorMsg {
    /// Bootstrap no-op: forces the first render before any input.
    Init,
    Up,
    Down,
    Left,
    Right,
    /// Toggle the item under the cursor in the selection set.
    Select,
    Confirm,
    Cancel,
}

impl Message for SelectorMsg {}

/// Immutable snapshot of one selector session.
///
/// Every transition rebuilds the value; nothing mutates in place. The
/// cursor is clamped on construction, so a stored index is always valid
/// while `choices` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorModel<T> {
    pub(crate) choices: Vec<T>,
    pub(crate) selected: Vec<T>,
    pub(crate) current_index: usize,
    pub(crate) title: String,
    pub(crate) completed: bool,
    pub(crate) cancelled: bool,
}

impl<T> SelectorModel<T> {
    /// Fresh session: empty selection, cursor on the first choice.
    pub fn new(choices: Vec<T>, title: impl Into<String>) -> Self {
        Self::with_index(choices, Vec::new(), 0, title.into())
    }

    pub(crate) fn with_index(
        choices: Vec<T>,
        selected: Vec<T>,
        index: usize,
        title: String,
    ) -> Self {
        let current_index = clamp_index(index, choices.len());
        Self {
            choices,
            selected,
            current_index,
            title,
            completed: false,
            cancelled: false,
        }
    }

    pub fn choices(&self) -> &[T] {
        &self.choices
    }

    /// Currently selected items, in the order they were selected.
    pub fn selected(&self) -> &[T] {
        &self.selected
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn was_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Consume the model and yield the selection, insertion order kept.
    pub fn into_selected(self) -> Vec<T> {
        self.selected
    }

    /// Grid rows needed for the current choice count.
    pub(crate) fn total_rows(&self) -> usize {
        self.choices.len().div_ceil(ITEMS_PER_COLUMN)
    }
}

/// The empty session; exists so the runtime can move state through
/// `mem::take`.
impl<T> Default for SelectorModel<T> {
    fn default() -> Self {
        Self {
            choices: Vec::new(),
            selected: Vec::new(),
            current_index: 0,
            title: String::new(),
            completed: false,
            cancelled: false,
        }
    }
}

impl<T> Model for SelectorModel<T> {
    fn state(&self) -> &Self {
        self
    }
}

/// Row-major decomposition of a linear index into `(row, col)`.
pub(crate) fn position(index: usize) -> (usize, usize) {
    (index / ITEMS_PER_COLUMN, index % ITEMS_PER_COLUMN)
}

/// Inverse of [`position`].
pub(crate) fn index_at(row: usize, col: usize) -> usize {
    row * ITEMS_PER_COLUMN + col
}

/// Clamp into `[0, len)`; 0 for an empty list.
fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { index.min(len - 1) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item{i}")).collect()
    }

    #[test]
    fn new_session_starts_unselected_at_the_first_choice() {
        let model = SelectorModel::new(choices(5), "pick");
        assert_eq!(model.current_index(), 0);
        assert!(model.selected().is_empty());
        assert!(!model.is_completed());
        assert!(!model.was_cancelled());
        assert_eq!(model.title(), "pick");
    }

    #[test]
    fn out_of_range_index_is_clamped_to_the_last_choice() {
        let model = SelectorModel::with_index(choices(3), Vec::new(), 99, String::new());
        assert_eq!(model.current_index(), 2);
    }

    #[test]
    fn empty_choices_pin_the_cursor_at_zero() {
        let model = SelectorModel::with_index(Vec::<String>::new(), Vec::new(), 7, String::new());
        assert_eq!(model.current_index(), 0);
    }

    #[test]
    fn default_is_the_empty_session() {
        let model = SelectorModel::<String>::default();
        assert!(model.choices().is_empty());
        assert_eq!(model.current_index(), 0);
        assert!(!model.is_completed());
    }

    #[test]
    fn position_and_index_at_are_inverses() {
        for index in 0..16 {
            let (row, col) = position(index);
            assert_eq!(index_at(row, col), index);
        }
    }

    #[test]
    fn total_rows_covers_the_ragged_tail() {
        assert_eq!(SelectorModel::new(choices(0), "").total_rows(), 0);
        assert_eq!(SelectorModel::new(choices(4), "").total_rows(), 1);
        assert_eq!(SelectorModel::new(choices(5), "").total_rows(), 2);
        assert_eq!(SelectorModel::new(choices(8), "").total_rows(), 2);
        assert_eq!(SelectorModel::new(choices(9), "").total_rows(), 3);
    }
}
