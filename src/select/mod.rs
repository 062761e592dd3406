//! Grid multi-select prompt: the one concrete widget on the MVU core.
//!
//! Organized along the same boundaries as the core expects its parts:
//! - `state`: the message set and the immutable model
//! - `update`: pure transitions
//! - `view`: grid layout and rendering
//! - `run`: key mapping, lifecycle policy, terminal wiring

pub mod run;
pub mod state;
pub mod update;
pub mod view;

pub use run::{map_key, show};
pub use state::{COLUMN_WIDTH, ITEMS_PER_COLUMN, SelectorModel, SelectorMsg};
pub use update::SelectorUpdate;
pub use view::SelectorView;
