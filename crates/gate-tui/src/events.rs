//! UI event types.
//!
//! All inputs to the TUI are converted to [`UiEvent`] before being processed
//! by the reducer.
//!
//! ## Inbox Pattern
//!
//! Async work (here: the debounce timer) sends its result events directly to
//! the runtime's event inbox; the runtime drains the inbox each frame and
//! feeds the events through the reducer. The reducer is the only place that
//! mutates state.

use crossterm::event::Event as CrosstermEvent;

use crate::common::RequestId;

/// Unified event enum for the TUI.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (render cadence, idle polling).
    Tick,

    /// Terminal input event (key, resize).
    Terminal(CrosstermEvent),

    /// The debounce quiet period elapsed for the form check armed as `req`.
    ///
    /// Only the latest armed request may publish; the reducer drops stale
    /// ids, so a timer that fired between supersession and cancellation has
    /// no effect.
    FormCheckElapsed { req: RequestId },
}
