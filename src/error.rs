//! Crate-wide error type.
//!
//! The state machine itself is total and cannot fail: out-of-range
//! navigation is a no-op and malformed construction input is clamped.
//! Every error this crate surfaces is a terminal-device failure.

use std::io;

use thiserror::Error;

/// Failures surfaced by a prompt session.
#[derive(Debug, Error)]
pub enum Error {
    /// Raw-mode acquisition or release failed.
    #[error("terminal setup failed: {0}")]
    Terminal(#[source] io::Error),

    /// The input device failed mid-session. Fatal: the loop cannot make
    /// progress without key events.
    #[error("input device failed: {0}")]
    Input(#[source] io::Error),

    /// Writing to the output surface failed.
    #[error("output surface failed: {0}")]
    Output(#[source] io::Error),
}
