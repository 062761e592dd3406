//! Terminal collaborators: output surface, input device, scope guards.
//!
//! The MVU core and the selector widget program against the [`Surface`]
//! and [`InputSource`] traits; everything crossterm-specific lives behind
//! them. Raw mode is a process-wide resource held by [`RawModeGuard`] for
//! the duration of a session.

pub mod input;
pub mod surface;

use std::io;

use crossterm::ExecutableCommand;
use crossterm::cursor::Show;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

pub use input::{InputSource, Key, TermInput};
pub use surface::{AnsiSurface, Line, Paint, Span, Surface};

/// Raw mode held for the lifetime of the guard.
///
/// Key events arrive unbuffered only in raw mode; the guard releases it
/// on drop so the shell gets a sane terminal back on early returns too.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Enable raw mode and install a panic hook that restores the
    /// terminal before the panic message prints.
    pub fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        install_panic_hook();
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Best-effort terminal restoration before the default panic output.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(Show);
        original_hook(panic_info);
    }));
}
