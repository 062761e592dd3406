//! Selector effects boundary: key mapping, lifecycle policy, terminal
//! wiring.
//!
//! Everything above this module is pure; this is where the widget meets
//! the real terminal. [`show`] is the single entry point. Kept minimal;
//! the intelligence lives in `state`/`update`/`view`.

use std::fmt::Display;
use std::marker::PhantomData;

use tracing::debug;

use crate::error::Error;
use crate::mvu::{Component, Lifecycle, Runtime};
use crate::term::{AnsiSurface, InputSource, Key, Line, RawModeGuard, Surface, TermInput};

use super::state::{SelectorModel, SelectorMsg};
use super::update::SelectorUpdate;
use super::view::SelectorView;

/// Map a key to a selector message.
///
/// Unmapped keys produce no message; the driver loops without
/// dispatching.
pub fn map_key(key: Key) -> Option<SelectorMsg> {
    match key {
        Key::Up | Key::Char('k') => Some(SelectorMsg::Up),
        Key::Down | Key::Char('j') => Some(SelectorMsg::Down),
        Key::Left | Key::Char('h') => Some(SelectorMsg::Left),
        Key::Right | Key::Char('l') => Some(SelectorMsg::Right),
        Key::Char(' ') => Some(SelectorMsg::Select),
        Key::Enter => Some(SelectorMsg::Confirm),
        Key::Esc => Some(SelectorMsg::Cancel),
        _ => None,
    }
}

/// Lifecycle policy for one selector session: reads keys, stops on
/// Confirm/Cancel, prints the outcome on exit.
pub struct SelectorLifecycle<T, I, S> {
    input: I,
    surface: S,
    _item: PhantomData<T>,
}

impl<T, I, S> SelectorLifecycle<T, I, S> {
    pub fn new(input: I, surface: S) -> Self {
        Self { input, surface, _item: PhantomData }
    }
}

impl<T, I, S> Lifecycle for SelectorLifecycle<T, I, S>
where
    T: Display + PartialEq,
    I: InputSource,
    S: Surface,
{
    type Model = SelectorModel<T>;
    type Msg = SelectorMsg;

    fn initial_message(&mut self) -> SelectorMsg {
        SelectorMsg::Init
    }

    fn handle_input(&mut self) -> Result<Option<SelectorMsg>, Error> {
        let key = self.input.read_key().map_err(Error::Input)?;
        Ok(map_key(key))
    }

    fn should_continue(&self, msg: &SelectorMsg, _state: &SelectorModel<T>) -> bool {
        !matches!(msg, SelectorMsg::Confirm | SelectorMsg::Cancel)
    }

    fn on_exit(&mut self, state: &SelectorModel<T>) -> Result<(), Error> {
        self.surface.set_cursor_visible(true).map_err(Error::Output)?;
        self.surface.clear().map_err(Error::Output)?;

        if !state.was_cancelled() && !state.selected().is_empty() {
            self.surface
                .write_line(&Line::raw("You selected:"))
                .map_err(Error::Output)?;
            for item in state.selected() {
                self.surface
                    .write_line(&Line::raw(format!("- {item}")))
                    .map_err(Error::Output)?;
            }
        } else {
            self.surface
                .write_line(&Line::raw("Selection cancelled"))
                .map_err(Error::Output)?;
        }
        self.surface.flush().map_err(Error::Output)
    }
}

/// Assemble and run one session against the given collaborators.
pub(crate) fn run_selector<T, I, S>(
    choices: Vec<T>,
    title: &str,
    input: I,
    surface: S,
) -> Result<SelectorModel<T>, Error>
where
    T: Display + Clone + PartialEq,
    I: InputSource,
    S: Surface + Clone,
{
    let model = SelectorModel::new(choices, title);
    let runtime = Runtime::new(model, SelectorUpdate, SelectorView::new(surface.clone()));
    let lifecycle = SelectorLifecycle::new(input, surface.clone());
    Component::new(runtime, lifecycle, surface).run()
}

/// Map the final state to the caller-visible result: cancelling discards
/// the selection.
fn finish<T>(state: SelectorModel<T>) -> Vec<T> {
    if state.was_cancelled() {
        Vec::new()
    } else {
        state.into_selected()
    }
}

/// Show the prompt and return the confirmed selection, in the order the
/// items were selected.
///
/// Empty `choices` short-circuits to an empty result without touching the
/// terminal.
pub fn show<T>(choices: Vec<T>, title: &str) -> Result<Vec<T>, Error>
where
    T: Display + Clone + PartialEq,
{
    if choices.is_empty() {
        return Ok(Vec::new());
    }

    let _raw = RawModeGuard::enable().map_err(Error::Terminal)?;
    debug!(choices = choices.len(), "selector session starting");

    let state = run_selector(choices, title, TermInput::new(), AnsiSurface::stdout())?;
    debug!(
        cancelled = state.was_cancelled(),
        selected = state.selected().len(),
        "selector session finished"
    );

    Ok(finish(state))
}
