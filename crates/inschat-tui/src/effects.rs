//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only; the reducer itself never
//! performs I/O or spawns tasks.

use inschat_core::client::Credentials;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskId, TaskKind};
use crate::state::Mode;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Send the credentials to the endpoint selected by `mode`.
    Submit {
        task: TaskId,
        mode: Mode,
        credentials: Credentials,
    },

    /// Start the one-shot post-login navigation timer.
    ScheduleRedirect { task: TaskId },

    /// Cancel an in-progress task. The runtime calls `cancel()` on the token.
    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },

    /// Open a URL in the system browser (best-effort).
    OpenBrowser { url: String },
}
