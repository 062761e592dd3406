//! gridselect: a grid-layout multi-select prompt for the terminal, built
//! on a minimal Model-Update-View core.
//!
//! State changes only through pure transition functions driven by
//! discrete messages; rendering is a projection of state. The crate ships
//! the generic runtime ([`mvu`]), the terminal collaborator traits
//! ([`term`]), and one widget built on them ([`select`]).
//!
//! ```no_run
//! let picked = gridselect::show(vec!["red", "green", "blue"], "Pick colors")?;
//! println!("{} colors picked", picked.len());
//! # Ok::<(), gridselect::Error>(())
//! ```

pub mod error;
pub mod mvu;
pub mod select;
pub mod term;

pub use error::Error;
pub use select::{SelectorModel, SelectorMsg, show};
