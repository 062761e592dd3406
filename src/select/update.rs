//! Pure selector transitions: `(model, message) → model`.
//!
//! Total over the message set. Out-of-range navigation is a silent no-op;
//! identity arms hand the same logical state back. Completion flags are
//! only ever set here, never cleared, and navigation/selection arms never
//! touch them.

use crate::mvu::Update;

use super::state::{SelectorModel, SelectorMsg, index_at, position};

/// The selector's update function.
pub struct SelectorUpdate;

impl<T: Clone + PartialEq> Update<SelectorModel<T>, SelectorMsg> for SelectorUpdate {
    fn apply(&self, model: SelectorModel<T>, msg: &SelectorMsg) -> SelectorModel<T> {
        match msg {
            SelectorMsg::Init => model,
            SelectorMsg::Up => move_up(model),
            SelectorMsg::Down => move_down(model),
            SelectorMsg::Left => move_left(model),
            SelectorMsg::Right => move_right(model),
            SelectorMsg::Select => toggle_selection(model),
            SelectorMsg::Confirm => SelectorModel { completed: true, ..model },
            SelectorMsg::Cancel => SelectorModel { completed: true, cancelled: true, ..model },
        }
    }
}

fn move_up<T>(model: SelectorModel<T>) -> SelectorModel<T> {
    let (row, col) = position(model.current_index);
    if row == 0 {
        return model;
    }
    move_to(model, index_at(row - 1, col))
}

fn move_down<T>(model: SelectorModel<T>) -> SelectorModel<T> {
    let (row, col) = position(model.current_index);
    if row + 1 >= model.total_rows() {
        return model;
    }
    move_to(model, index_at(row + 1, col))
}

fn move_left<T>(model: SelectorModel<T>) -> SelectorModel<T> {
    let (row, col) = position(model.current_index);
    if col == 0 {
        return model;
    }
    move_to(model, index_at(row, col - 1))
}

/// No column bound: when the destination index exists, the cursor carries
/// over to the next row's first cell.
fn move_right<T>(model: SelectorModel<T>) -> SelectorModel<T> {
    let (row, col) = position(model.current_index);
    move_to(model, index_at(row, col + 1))
}

/// Accept the destination only when it lands on a real choice.
fn move_to<T>(model: SelectorModel<T>, index: usize) -> SelectorModel<T> {
    if index < model.choices.len() {
        SelectorModel { current_index: index, ..model }
    } else {
        model
    }
}

fn toggle_selection<T: Clone + PartialEq>(model: SelectorModel<T>) -> SelectorModel<T> {
    // Nothing to toggle on an empty grid.
    if model.choices.is_empty() {
        return model;
    }

    let SelectorModel { choices, mut selected, current_index, title, completed, cancelled } = model;
    let current = &choices[current_index];
    match selected.iter().position(|item| item == current) {
        Some(at) => {
            selected.remove(at);
        }
        None => selected.push(current.clone()),
    }
    SelectorModel { choices, selected, current_index, title, completed, cancelled }
}
