//! Component lifecycle driver: input loop, continuation policy, teardown.
//!
//! The driver is the only caller of [`Runtime::dispatch`]. Cursor
//! visibility is process-wide state; the driver hides the cursor for the
//! whole session through a scope guard released on every exit path, error
//! returns included.

use tracing::debug;

use crate::error::Error;
use crate::term::Surface;

use super::{Message, Model, Runtime, Update, View};

/// Input, continuation, and teardown policy for one component session.
pub trait Lifecycle {
    type Model;
    type Msg: Message;

    /// Message dispatched once before any input, to establish the first
    /// render.
    fn initial_message(&mut self) -> Self::Msg;

    /// Block for one input event and map it to a message. `Ok(None)`
    /// means the event maps to nothing; the driver loops without
    /// dispatching.
    fn handle_input(&mut self) -> Result<Option<Self::Msg>, Error>;

    /// Whether the loop continues after `msg` produced `state`.
    fn should_continue(&self, msg: &Self::Msg, state: &Self::Model) -> bool;

    /// Teardown with the final state: restore cursor visibility, print
    /// the outcome.
    fn on_exit(&mut self, state: &Self::Model) -> Result<(), Error>;
}

/// A runtime bound to a lifecycle policy, plus a surface handle used only
/// for cursor scoping.
pub struct Component<U, V, L, S>
where
    L: Lifecycle,
{
    runtime: Runtime<L::Model, U, V>,
    lifecycle: L,
    surface: S,
}

impl<U, V, L, S> Component<U, V, L, S>
where
    L: Lifecycle,
    L::Model: Model + Default,
    U: Update<L::Model, L::Msg>,
    V: View<L::Model>,
    S: Surface,
{
    pub fn new(runtime: Runtime<L::Model, U, V>, lifecycle: L, surface: S) -> Self {
        Self { runtime, lifecycle, surface }
    }

    /// Run the session to completion and return the final state.
    pub fn run(self) -> Result<L::Model, Error> {
        let Component { mut runtime, mut lifecycle, mut surface } = self;

        let _cursor = HiddenCursor::acquire(&mut surface)?;
        debug!("component session started");

        runtime.dispatch(&lifecycle.initial_message())?;

        loop {
            let Some(msg) = lifecycle.handle_input()? else {
                continue;
            };
            runtime.dispatch(&msg)?;
            if !lifecycle.should_continue(&msg, runtime.state()) {
                lifecycle.on_exit(runtime.state())?;
                debug!("component session ended");
                return Ok(runtime.into_state());
            }
        }
    }
}

/// Scope guard: cursor hidden while alive, shown again on drop.
///
/// Drop release is best-effort. The normal path also restores visibility
/// through [`Lifecycle::on_exit`]; the toggle is idempotent.
struct HiddenCursor<'a, S: Surface> {
    surface: &'a mut S,
}

impl<'a, S: Surface> HiddenCursor<'a, S> {
    fn acquire(surface: &'a mut S) -> Result<Self, Error> {
        surface.set_cursor_visible(false).map_err(Error::Output)?;
        Ok(Self { surface })
    }
}

impl<S: Surface> Drop for HiddenCursor<'_, S> {
    fn drop(&mut self) {
        let _ = self.surface.set_cursor_visible(true);
    }
}
