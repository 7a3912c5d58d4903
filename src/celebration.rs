//! The one-shot celebratory prompt shown a moment after purchase
//! confirmation.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// Delay before the prompt surfaces, matching the confirmation screen.
pub const CELEBRATION_DELAY: Duration = Duration::from_secs(3);

/// A cancelable one-shot timer tied to the confirmation screen's lifetime.
///
/// The callback fires at most once, after `delay`. Dropping the timer
/// (leaving the screen) before it fires cancels it; firing has no effect on
/// the session or its pricing.
pub struct CelebrationTimer {
    handle: JoinHandle<()>,
}

impl CelebrationTimer {
    pub fn start<F>(delay: Duration, on_fire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!("Celebration prompt firing");
            on_fire();
        });
        Self { handle }
    }

    /// Explicit cancellation; dropping the timer has the same effect.
    pub fn cancel(self) {
        self.handle.abort();
    }
}

impl Drop for CelebrationTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn fires_exactly_once_after_the_delay() {
        let fired = Arc::new(AtomicU32::new(0));
        let counter = fired.clone();
        let _timer = CelebrationTimer::start(CELEBRATION_DELAY, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // Never repeats.
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn leaving_the_screen_cancels_the_prompt() {
        let fired = Arc::new(AtomicU32::new(0));
        let counter = fired.clone();
        let timer = CelebrationTimer::start(CELEBRATION_DELAY, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_secs(1)).await;
        drop(timer);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn explicit_cancel_matches_drop() {
        let fired = Arc::new(AtomicU32::new(0));
        let counter = fired.clone();
        let timer = CelebrationTimer::start(CELEBRATION_DELAY, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        timer.cancel();
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
