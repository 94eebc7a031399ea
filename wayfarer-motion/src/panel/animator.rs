//! Simple time-based tween animator for snapping to a target offset

use std::time::{Duration, Instant};

use wayfarer_config::EasingKind;

#[derive(Debug, Clone)]
pub struct SnapAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
    easing: EasingKind,
}

impl Default for SnapAnimator {
    fn default() -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: Instant::now(),
            duration: Duration::from_millis(280),
            easing: EasingKind::EaseOut,
        }
    }
}

impl SnapAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn start(
        &mut self,
        current: f32,
        target: f32,
        duration: Duration,
        easing: EasingKind,
        now: Instant,
    ) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = now;
        self.duration = duration;
        self.easing = easing;
    }

    /// Offset at `now` without advancing state, or `None` when inactive.
    pub fn sample(&self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        if self.duration.is_zero() || elapsed >= self.duration {
            return Some(self.target);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.apply(t);
        Some(self.start + (self.target - self.start) * eased)
    }

    /// Returns Some(next_offset) when animating, or None when finished/inactive.
    /// The frame that reaches the target deactivates the animator.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let next = self.sample(now)?;
        if now.saturating_duration_since(self.started_at) >= self.duration {
            self.active = false;
        }
        Some(next)
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_reaches_target_and_stops() {
        let t0 = Instant::now();
        let mut anim = SnapAnimator::new();
        anim.start(
            600.0,
            300.0,
            Duration::from_millis(200),
            EasingKind::Linear,
            t0,
        );

        assert_eq!(anim.tick(t0), Some(600.0));
        assert_eq!(anim.tick(t0 + Duration::from_millis(100)), Some(450.0));
        assert_eq!(anim.tick(t0 + Duration::from_millis(250)), Some(300.0));
        assert!(!anim.is_active());
        assert_eq!(anim.tick(t0 + Duration::from_millis(300)), None);
    }

    #[test]
    fn ease_out_moves_faster_early() {
        let t0 = Instant::now();
        let mut anim = SnapAnimator::new();
        anim.start(0.0, 100.0, Duration::from_millis(100), EasingKind::EaseOut, t0);
        let mid = anim.sample(t0 + Duration::from_millis(50)).expect("active");
        assert!(mid > 50.0);
        anim.cancel();
        assert_eq!(anim.sample(t0), None);
    }
}
