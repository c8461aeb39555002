//! Async effect handlers.
//!
//! Each handler resolves to the `UiEvent` it wants delivered back to the
//! reducer, or `None` when it finished without anything to report.

use std::sync::Arc;

use inschat_core::client::{AuthClient, Credentials};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::common::TaskId;
use crate::events::UiEvent;
use crate::state::Mode;
use crate::update::REDIRECT_DELAY;

/// Sends the credentials to the server and reports the outcome.
///
/// Success discards the response body: the reducer only needs to know which
/// mode the submission was made in, and the session cookie is already stored
/// in the client's jar by the time this resolves.
pub async fn submit_credentials(
    client: Arc<AuthClient>,
    id: TaskId,
    mode: Mode,
    credentials: Credentials,
) -> UiEvent {
    let result = match mode {
        Mode::Login => client.login(&credentials).await,
        Mode::Register => client.register(&credentials).await,
    };
    debug!(?id, ?mode, ok = result.is_ok(), "submission resolved");
    UiEvent::SubmitResult {
        id,
        mode,
        result: result.map(|_| ()),
    }
}

/// Waits out the post-login delay, then reports that navigation is due.
///
/// Cancellation (quit during the delay) resolves to `None` so nothing is
/// delivered and the screen never changes.
pub async fn redirect_delay(id: TaskId, cancel: Option<CancellationToken>) -> Option<UiEvent> {
    let sleep = tokio::time::sleep(REDIRECT_DELAY);
    if let Some(cancel) = cancel {
        tokio::select! {
            () = cancel.cancelled() => {
                debug!(?id, "redirect cancelled");
                return None;
            }
            () = sleep => {}
        }
    } else {
        sleep.await;
    }
    Some(UiEvent::RedirectDue { id })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_redirect_delay_fires_after_one_second() {
        let start = tokio::time::Instant::now();
        let event = redirect_delay(TaskId(7), None).await;
        assert!(matches!(event, Some(UiEvent::RedirectDue { id: TaskId(7) })));
        assert_eq!(start.elapsed(), REDIRECT_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_redirect_never_fires() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let event = redirect_delay(TaskId(7), Some(cancel)).await;
        assert!(event.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_redirect_cancelled_mid_delay() {
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(redirect_delay(TaskId(3), Some(cancel.clone())));
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        cancel.cancel();
        let event = handle.await.unwrap();
        assert!(event.is_none());
    }
}
