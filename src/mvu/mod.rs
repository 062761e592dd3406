//! Minimal MVU core: typing contracts, the runtime, and the lifecycle
//! driver.
//!
//! State changes only through [`Update::apply`]; rendering is a projection
//! of state performed by [`View::render`]. The [`Component`] driver owns
//! the input loop and the terminal setup/teardown around it. Nothing in
//! this module knows about the selector widget; it programs against these
//! contracts alone.

pub mod component;
pub mod runtime;

use std::fmt;

use crate::error::Error;

pub use component::{Component, Lifecycle};
pub use runtime::Runtime;

/// Marker for a discrete event tag driving a state transition.
///
/// Message sets are closed: plain enums, dispatched exhaustively. The
/// `Debug` bound lets the runtime trace dispatches.
pub trait Message: fmt::Debug {}

/// A model exposes its current state (reflexively, itself).
pub trait Model {
    fn state(&self) -> &Self;
}

/// Pure state transition: `(model, message) → model`.
///
/// Total over the declared message set; arms that don't apply return the
/// model unchanged.
pub trait Update<M, Msg: Message> {
    fn apply(&self, model: M, msg: &Msg) -> M;
}

/// Side-effecting projection of state onto an output device.
///
/// Returns the (unchanged) model so rendering fits the same
/// value-to-value shape as [`Update`]; the `Result` carries device
/// failures only, never state logic.
pub trait View<M> {
    fn render(&mut self, model: M) -> Result<M, Error>;
}
