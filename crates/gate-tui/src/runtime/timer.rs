//! Debounce timer task.
//!
//! The runtime arms one task per form-check request. The task sleeps for
//! the quiet period and posts the elapsed event into the inbox, unless its
//! token is cancelled first; a cancelled task exits without sending.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::inbox::UiEventSender;
use crate::common::RequestId;
use crate::events::UiEvent;

pub(crate) fn spawn_form_check(
    tx: UiEventSender,
    req: RequestId,
    token: CancellationToken,
    delay: Duration,
) {
    tokio::spawn(async move {
        tokio::select! {
            () = token.cancelled() => {}
            () = tokio::time::sleep(delay) => {
                let _ = tx.send(UiEvent::FormCheckElapsed { req });
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::LatestOnly;
    use tokio::sync::mpsc;

    const DELAY: Duration = Duration::from_millis(500);

    #[tokio::test]
    async fn fires_after_the_quiet_period() {
        tokio::time::pause();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let req = LatestOnly::default().begin();

        spawn_form_check(tx, req, CancellationToken::new(), DELAY);
        // Let the task register its sleep before moving the clock.
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(499)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());

        tokio::time::advance(Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        match rx.try_recv().expect("timer should have fired") {
            UiEvent::FormCheckElapsed { req: fired } => assert_eq!(fired, req),
            other => panic!("expected FormCheckElapsed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn cancelled_timer_never_posts() {
        tokio::time::pause();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let token = CancellationToken::new();

        spawn_form_check(tx, LatestOnly::default().begin(), token.clone(), DELAY);
        tokio::task::yield_now().await;

        token.cancel();
        tokio::time::advance(Duration::from_millis(600)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn cancellation_is_idempotent() {
        tokio::time::pause();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let token = CancellationToken::new();

        spawn_form_check(tx, LatestOnly::default().begin(), token.clone(), DELAY);
        tokio::task::yield_now().await;

        token.cancel();
        token.cancel();
        tokio::time::advance(Duration::from_millis(600)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn rearm_silences_the_superseded_timer() {
        tokio::time::pause();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut gate = LatestOnly::default();

        let first_token = CancellationToken::new();
        spawn_form_check(tx.clone(), gate.begin(), first_token.clone(), DELAY);
        tokio::task::yield_now().await;

        // 200ms in, input arrives: cancel and re-arm.
        tokio::time::advance(Duration::from_millis(200)).await;
        first_token.cancel();
        let second = gate.begin();
        spawn_form_check(tx, second, CancellationToken::new(), DELAY);
        tokio::task::yield_now().await;

        tokio::time::advance(DELAY).await;
        tokio::task::yield_now().await;

        match rx.try_recv().expect("second timer should have fired") {
            UiEvent::FormCheckElapsed { req } => assert_eq!(req, second),
            other => panic!("expected FormCheckElapsed, got {other:?}"),
        }
        // Exactly one event: the first timer was silenced.
        assert!(rx.try_recv().is_err());
    }
}
