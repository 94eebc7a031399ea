//! Timers backed by the tokio runtime.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::{TimerDriver, TimerFired, TimerHandle, TimerId, TimerSpec};

/// Spawns one task per armed timer on the current tokio runtime and delivers
/// firings over an unbounded channel. Cancelling a handle aborts its task.
///
/// Outside a runtime, arming degrades to an inert handle that never fires.
#[derive(Debug, Clone)]
pub struct TokioTimers {
    tx: mpsc::UnboundedSender<TimerFired>,
    next_id: Arc<AtomicU64>,
}

impl TokioTimers {
    /// Create a driver and the receiver its firings arrive on.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<TimerFired>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let driver = Self {
            tx,
            next_id: Arc::new(AtomicU64::new(1)),
        };
        (driver, rx)
    }
}

impl TimerDriver for TokioTimers {
    fn arm(&self, spec: TimerSpec) -> TimerHandle {
        let id = TimerId(self.next_id.fetch_add(1, Ordering::Relaxed));

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            log::warn!(
                "no tokio runtime while arming {id} ({}); timer disabled",
                spec.label
            );
            return TimerHandle::inert(id, spec.label);
        };

        let tx = self.tx.clone();
        let task = runtime.spawn(async move {
            time::sleep(spec.delay).await;
            if tx.send(TimerFired { id }).is_err() {
                return;
            }
            let Some(period) = spec.effective_period() else {
                return;
            };
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(TimerFired { id }).is_err() {
                    break;
                }
            }
        });

        log::debug!("armed {id} ({}) delay={:?}", spec.label, spec.delay);
        let abort = task.abort_handle();
        TimerHandle::new(id, spec.label, move || abort.abort())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn periodic_timer_fires_until_cancelled() {
        let (timers, mut rx) = TokioTimers::channel();
        let handle =
            timers.arm(TimerSpec::every(Duration::from_millis(100), "probe"));

        for _ in 0..3 {
            let fired = rx.recv().await.expect("fires");
            assert!(handle.matches(&fired));
        }
        handle.cancel();

        time::sleep(Duration::from_millis(1_000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn single_shot_fires_once_after_delay() {
        let (timers, mut rx) = TokioTimers::channel();
        let start = Instant::now();
        let handle =
            timers.arm(TimerSpec::once(Duration::from_millis(400), "settle"));

        let fired = rx.recv().await.expect("fires");
        assert_eq!(fired.id, handle.id());
        assert!(start.elapsed() >= Duration::from_millis(400));

        time::sleep(Duration::from_millis(1_000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn zero_period_keeps_firing() {
        let (timers, mut rx) = TokioTimers::channel();
        let handle = timers.arm(TimerSpec::every(Duration::ZERO, "busy"));

        for _ in 0..5 {
            let fired = rx.recv().await.expect("fires");
            assert!(handle.matches(&fired));
        }
        handle.cancel();
    }

    #[test]
    fn without_runtime_the_handle_is_inert() {
        let (timers, mut rx) = TokioTimers::channel();
        let handle = timers.arm(TimerSpec::once(Duration::ZERO, "orphan"));
        assert!(format!("{handle:?}").contains("live: false"));
        drop(handle);
        assert!(rx.try_recv().is_err());
    }
}
