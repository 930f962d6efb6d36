//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::common::RequestId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Arm the whole-form validity check: after `delay` of quiet, the timer
    /// posts [`crate::events::UiEvent::FormCheckElapsed`] into the inbox.
    ///
    /// The reducer created `token` and holds a clone; cancelling it stops
    /// the timer without an event.
    ArmFormCheck {
        req: RequestId,
        token: CancellationToken,
        delay: Duration,
    },

    /// Cancel a superseded or abandoned timer. Cancelling an already fired
    /// or already cancelled timer is a no-op.
    CancelTimer { token: CancellationToken },

    /// Mirror the in-memory session flag into the durable slot.
    PersistSession,
}
