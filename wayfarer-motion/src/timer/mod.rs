//! Cancellable deferred tasks.
//!
//! A [`TimerDriver`] arms single-shot or periodic timers and hands back a
//! [`TimerHandle`]. Firing is reported out of band as a [`TimerFired`]
//! carrying the timer's id; the owner routes it back into its state machine,
//! which compares the id against the one handle it still holds. Cancelling
//! (or dropping) the handle stops future firings, and any firing already in
//! flight is recognised as stale by that id check.

mod manual;
mod tokio_timers;

use std::fmt;
use std::time::Duration;

pub use manual::ManualTimers;
pub use tokio_timers::TokioTimers;

/// Smallest interval between periodic firings. Shorter periods (including
/// zero) are raised to this by every driver.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Identity of one armed timer. Unique per driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// What to arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSpec {
    /// Delay before the first firing.
    pub delay: Duration,
    /// Interval between subsequent firings; `None` for single-shot.
    pub period: Option<Duration>,
    /// Short name used in logs.
    pub label: &'static str,
}

impl TimerSpec {
    pub const fn once(delay: Duration, label: &'static str) -> Self {
        Self {
            delay,
            period: None,
            label,
        }
    }

    /// Periodic timer whose first firing is one `period` away.
    pub const fn every(period: Duration, label: &'static str) -> Self {
        Self {
            delay: period,
            period: Some(period),
            label,
        }
    }

    pub fn is_periodic(&self) -> bool {
        self.period.is_some()
    }

    /// Period as the drivers schedule it, never below [`MIN_PERIOD`].
    pub fn effective_period(&self) -> Option<Duration> {
        self.period.map(|period| period.max(MIN_PERIOD))
    }
}

/// Notification that a timer fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    pub id: TimerId,
}

type CancelFn = Box<dyn FnOnce() + Send>;

/// Owner of one armed timer. Cancels on [`TimerHandle::cancel`] or on drop.
pub struct TimerHandle {
    id: TimerId,
    label: &'static str,
    cancel: Option<CancelFn>,
}

impl TimerHandle {
    pub fn new(
        id: TimerId,
        label: &'static str,
        cancel: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            id,
            label,
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle with nothing behind it; it never fires.
    pub fn inert(id: TimerId, label: &'static str) -> Self {
        Self {
            id,
            label,
            cancel: None,
        }
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Whether `fired` came from this timer.
    pub fn matches(&self, fired: &TimerFired) -> bool {
        fired.id == self.id
    }

    pub fn cancel(mut self) {
        self.cancel_inner();
    }

    fn cancel_inner(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            log::trace!("cancelling {} ({})", self.id, self.label);
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel_inner();
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("live", &self.cancel.is_some())
            .finish()
    }
}

/// Source of timers. Implementations decide how time passes: the tokio
/// runtime in production, a virtual clock in tests.
pub trait TimerDriver {
    fn arm(&self, spec: TimerSpec) -> TimerHandle;
}

impl<T: TimerDriver + ?Sized> TimerDriver for &T {
    fn arm(&self, spec: TimerSpec) -> TimerHandle {
        (**self).arm(spec)
    }
}
