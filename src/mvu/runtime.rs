//! The MVU runtime: current state plus an update/view pair, driven by
//! `dispatch`.

use tracing::trace;

use crate::error::Error;

use super::{Message, Model, Update, View};

/// Owns the current state of one component instance.
///
/// All mutation goes through [`Runtime::dispatch`]; no collaborator
/// outside the driver touches the state directly.
pub struct Runtime<M, U, V> {
    state: M,
    update: U,
    view: V,
}

impl<M, U, V> Runtime<M, U, V>
where
    M: Model + Default,
    V: View<M>,
{
    pub fn new(initial: M, update: U, view: V) -> Self {
        Self { state: initial, update, view }
    }

    /// Apply the update for `msg`, replace the current state with the
    /// result, then render the new state.
    pub fn dispatch<Msg>(&mut self, msg: &Msg) -> Result<(), Error>
    where
        Msg: Message,
        U: Update<M, Msg>,
    {
        trace!(?msg, "dispatch");
        let state = std::mem::take(&mut self.state);
        let next = self.update.apply(state, msg);
        self.state = self.view.render(next)?;
        Ok(())
    }

    /// The current state snapshot.
    pub fn state(&self) -> &M {
        self.state.state()
    }

    /// Consume the runtime and yield the final state.
    pub fn into_state(self) -> M {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Counter {
        value: i32,
    }

    impl Model for Counter {
        fn state(&self) -> &Self {
            self
        }
    }

    #[derive(Debug)]
    enum CounterMsg {
        Add(i32),
        Noop,
    }

    impl Message for CounterMsg {}

    struct CounterUpdate;

    impl Update<Counter, CounterMsg> for CounterUpdate {
        fn apply(&self, model: Counter, msg: &CounterMsg) -> Counter {
            match msg {
                CounterMsg::Add(n) => Counter { value: model.value + n },
                CounterMsg::Noop => model,
            }
        }
    }

    /// Records every value it is asked to render.
    #[derive(Default)]
    struct RecordingView {
        frames: Vec<i32>,
    }

    impl View<Counter> for RecordingView {
        fn render(&mut self, model: Counter) -> Result<Counter, Error> {
            self.frames.push(model.value);
            Ok(model)
        }
    }

    struct FailingView;

    impl View<Counter> for FailingView {
        fn render(&mut self, _model: Counter) -> Result<Counter, Error> {
            Err(Error::Output(io::Error::new(io::ErrorKind::BrokenPipe, "gone")))
        }
    }

    #[test]
    fn dispatch_applies_update_then_renders_the_new_state() {
        let mut runtime = Runtime::new(Counter::default(), CounterUpdate, RecordingView::default());

        runtime.dispatch(&CounterMsg::Add(3)).unwrap();
        runtime.dispatch(&CounterMsg::Add(4)).unwrap();

        assert_eq!(runtime.state(), &Counter { value: 7 });
        assert_eq!(runtime.view.frames, vec![3, 7]);
    }

    #[test]
    fn noop_message_leaves_state_unchanged_but_still_renders() {
        let mut runtime = Runtime::new(Counter { value: 5 }, CounterUpdate, RecordingView::default());

        runtime.dispatch(&CounterMsg::Noop).unwrap();

        assert_eq!(runtime.state(), &Counter { value: 5 });
        assert_eq!(runtime.view.frames, vec![5]);
    }

    #[test]
    fn into_state_yields_the_final_state() {
        let mut runtime = Runtime::new(Counter::default(), CounterUpdate, RecordingView::default());
        runtime.dispatch(&CounterMsg::Add(9)).unwrap();

        assert_eq!(runtime.into_state(), Counter { value: 9 });
    }

    #[test]
    fn view_failure_propagates() {
        let mut runtime = Runtime::new(Counter::default(), CounterUpdate, FailingView);

        let err = runtime.dispatch(&CounterMsg::Add(1)).unwrap_err();
        assert!(matches!(err, Error::Output(_)));
    }
}
