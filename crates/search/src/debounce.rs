// crates/search/src/debounce.rs
//! Trailing-edge debouncer for query input

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Coalesces a burst of values into a single trailing emission.
///
/// Each `schedule` call discards any pending timer (its value is never
/// emitted) and starts a fresh one; only the value present when a timer
/// runs to completion is sent, exactly once, into the channel. The object
/// keeps its identity across uses and owns its timer handle, so there is
/// never more than one live timer.
pub struct Debouncer {
    delay: Duration,
    tx: mpsc::Sender<String>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Creates a debouncer emitting into `tx` after `delay` of quiet
    pub fn new(delay: Duration, tx: mpsc::Sender<String>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Schedules `value` for emission after the quiet period.
    ///
    /// Any previously scheduled value is discarded entirely.
    pub fn schedule(&mut self, value: impl Into<String>) {
        self.cancel();

        let value = value.into();
        let delay = self.delay;
        let tx = self.tx.clone();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(value).await.is_err() {
                log::debug!("Debounced emission dropped: receiver closed");
            }
        }));
    }

    /// Cancels any pending emission.
    ///
    /// Idempotent and safe to call when nothing is pending. After this call
    /// no emission happens until the next `schedule`.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Returns the configured quiet period
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    const SHORT_DELAY: Duration = Duration::from_millis(50);

    fn debouncer(delay: Duration) -> (Debouncer, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(16);
        (Debouncer::new(delay, tx), rx)
    }

    #[tokio::test]
    async fn test_burst_emits_only_last_value() {
        let (mut debouncer, mut rx) = debouncer(SHORT_DELAY);

        for value in ["t", "ta", "tar"] {
            debouncer.schedule(value);
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        let emitted = timeout(Duration::from_millis(500), rx.recv())
            .await
            .expect("Should emit within the delay")
            .expect("Channel should stay open");
        assert_eq!(emitted, "tar");

        // Nothing else may arrive
        let extra = timeout(Duration::from_millis(100), rx.recv()).await;
        assert!(extra.is_err(), "Expected exactly one emission");
    }

    #[tokio::test]
    async fn test_spaced_inputs_each_emit() {
        let (mut debouncer, mut rx) = debouncer(Duration::from_millis(20));

        for value in ["a", "b"] {
            debouncer.schedule(value);
            tokio::time::sleep(Duration::from_millis(60)).await;
        }

        assert_eq!(rx.recv().await.as_deref(), Some("a"));
        assert_eq!(rx.recv().await.as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn test_cancel_suppresses_pending_emission() {
        let (mut debouncer, mut rx) = debouncer(SHORT_DELAY);

        debouncer.schedule("doomed");
        debouncer.cancel();

        let outcome = timeout(Duration::from_millis(150), rx.recv()).await;
        assert!(outcome.is_err(), "Cancelled value must never be emitted");
    }

    #[tokio::test]
    async fn test_cancel_is_idempotent() {
        let (mut debouncer, _rx) = debouncer(SHORT_DELAY);

        // Safe with no timer pending, and repeatedly
        debouncer.cancel();
        debouncer.schedule("x");
        debouncer.cancel();
        debouncer.cancel();
    }

    #[tokio::test]
    async fn test_drop_cancels_pending_emission() {
        let (tx, mut rx) = mpsc::channel(16);
        {
            let mut debouncer = Debouncer::new(SHORT_DELAY, tx);
            debouncer.schedule("dropped");
        }

        let outcome = timeout(Duration::from_millis(150), rx.recv()).await;
        // Sender side is gone, so the channel closes with no emission
        assert!(matches!(outcome, Ok(None) | Err(_)));
    }

    #[tokio::test]
    async fn test_schedule_after_cancel_still_works() {
        let (mut debouncer, mut rx) = debouncer(Duration::from_millis(20));

        debouncer.schedule("first");
        debouncer.cancel();
        debouncer.schedule("second");

        let emitted = timeout(Duration::from_millis(500), rx.recv())
            .await
            .expect("Should emit")
            .expect("Channel should stay open");
        assert_eq!(emitted, "second");
    }
}
