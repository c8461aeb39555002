//! Events consumed by the reducer.
//!
//! Async handlers send these through the runtime inbox; the event loop also
//! produces `Tick` and `Terminal` events locally.

use inschat_core::client::AuthError;

use crate::common::{TaskId, TaskKind, TaskStarted};
use crate::state::Mode;

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic animation/render tick.
    Tick,
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// An async task was spawned by the runtime.
    TaskStarted { kind: TaskKind, started: TaskStarted },
    /// A submit round trip resolved. `mode` is the mode captured when the
    /// request was sent, not the current one.
    SubmitResult {
        id: TaskId,
        mode: Mode,
        result: Result<(), AuthError>,
    },
    /// The post-login navigation delay elapsed.
    RedirectDue { id: TaskId },
}
