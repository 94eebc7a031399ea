//! Virtual-clock timers for deterministic tests and simulations.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;

use super::{TimerDriver, TimerFired, TimerHandle, TimerId, TimerSpec};

/// Timers that only fire when the test advances virtual time.
///
/// Clones share the same clock, like several engines sharing one backing
/// timer store. Firings are dispatched one at a time in deadline order (ties
/// in arming order), and no lock is held while the callback runs, so the
/// callback may freely cancel and arm timers.
#[derive(Debug, Clone, Default)]
pub struct ManualTimers {
    clock: Arc<Mutex<VirtualClock>>,
}

#[derive(Debug, Default)]
struct VirtualClock {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    pending: Vec<PendingTimer>,
}

#[derive(Debug, Clone)]
struct PendingTimer {
    id: TimerId,
    label: &'static str,
    deadline: Duration,
    period: Option<Duration>,
    seq: u64,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.clock.lock().now
    }

    /// Number of armed, uncancelled timers.
    pub fn pending(&self) -> usize {
        self.clock.lock().pending.len()
    }

    /// Labels of armed timers, earliest deadline first.
    pub fn pending_labels(&self) -> Vec<&'static str> {
        let clock = self.clock.lock();
        let mut pending = clock.pending.clone();
        pending.sort_by_key(|t| (t.deadline, t.seq));
        pending.into_iter().map(|t| t.label).collect()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.clock.lock().pending.iter().map(|t| t.deadline).min()
    }

    /// Move virtual time forward by `by`, dispatching every firing that falls
    /// inside the window. Returns how many firings were dispatched.
    pub fn advance<F>(&self, by: Duration, mut dispatch: F) -> usize
    where
        F: FnMut(TimerFired),
    {
        let target = self.now() + by;
        let mut fired = 0;
        while let Some(event) = self.pop_due(target) {
            dispatch(event);
            fired += 1;
        }
        let mut clock = self.clock.lock();
        if clock.now < target {
            clock.now = target;
        }
        fired
    }

    /// Jump straight to the next deadline and dispatch that one firing.
    /// Returns the new virtual time, or `None` when nothing is armed.
    pub fn fire_next<F>(&self, dispatch: F) -> Option<Duration>
    where
        F: FnOnce(TimerFired),
    {
        let deadline = self.next_deadline()?;
        let event = self.pop_due(deadline)?;
        dispatch(event);
        Some(self.now())
    }

    fn pop_due(&self, limit: Duration) -> Option<TimerFired> {
        let mut clock = self.clock.lock();
        let slot = clock
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= limit)
            .min_by_key(|(_, t)| (t.deadline, t.seq))
            .map(|(i, _)| i)?;

        let timer = clock.pending[slot].clone();
        clock.now = clock.now.max(timer.deadline);
        match timer.period {
            Some(period) => {
                let seq = clock.next_seq;
                clock.next_seq += 1;
                let entry = &mut clock.pending[slot];
                entry.deadline = timer.deadline + period;
                entry.seq = seq;
            }
            None => {
                clock.pending.swap_remove(slot);
            }
        }
        log::trace!("virtual clock fired {} ({})", timer.id, timer.label);
        Some(TimerFired { id: timer.id })
    }

    fn cancel(clock: &Weak<Mutex<VirtualClock>>, id: TimerId) {
        if let Some(clock) = clock.upgrade() {
            clock.lock().pending.retain(|t| t.id != id);
        }
    }
}

impl TimerDriver for ManualTimers {
    fn arm(&self, spec: TimerSpec) -> TimerHandle {
        let id = {
            let mut clock = self.clock.lock();
            clock.next_id += 1;
            let id = TimerId(clock.next_id);
            let seq = clock.next_seq;
            clock.next_seq += 1;
            let deadline = clock.now + spec.delay;
            clock.pending.push(PendingTimer {
                id,
                label: spec.label,
                deadline,
                period: spec.effective_period(),
                seq,
            });
            id
        };
        let weak = Arc::downgrade(&self.clock);
        TimerHandle::new(id, spec.label, move || Self::cancel(&weak, id))
    }
}
