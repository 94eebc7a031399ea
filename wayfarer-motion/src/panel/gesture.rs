//! Drag sessions on the panel handle.

/// How a drag session ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Movement never reached the slop threshold; the gesture is a tap.
    Tap,
    /// The panel followed the finger; settle it.
    Pan { velocity: Option<f32> },
}

/// Transient state of one drag on the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    start_offset: f32,
    delta: f32,
    captured: bool,
}

impl DragSession {
    pub fn begin(start_offset: f32) -> Self {
        Self {
            start_offset,
            delta: 0.0,
            captured: false,
        }
    }

    /// Record the total delta since the drag began. Once the movement
    /// reaches `slop` the session is captured as a pan and stays captured
    /// even if the finger comes back.
    pub fn update(&mut self, delta: f32, slop: f32) -> bool {
        if !delta.is_finite() {
            return self.captured;
        }
        self.delta = delta;
        if !self.captured && delta.abs() >= slop {
            self.captured = true;
        }
        self.captured
    }

    pub fn start_offset(&self) -> f32 {
        self.start_offset
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Unclamped target offset.
    pub fn target(&self) -> f32 {
        self.start_offset + self.delta
    }

    pub fn finish(self, velocity: Option<f32>) -> DragOutcome {
        if self.captured {
            DragOutcome::Pan { velocity }
        } else {
            DragOutcome::Tap
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_movement_stays_a_tap() {
        let mut session = DragSession::begin(300.0);
        assert!(!session.update(4.0, 10.0));
        assert!(!session.update(-9.5, 10.0));
        assert_eq!(session.finish(Some(50.0)), DragOutcome::Tap);
    }

    #[test]
    fn capture_is_sticky() {
        let mut session = DragSession::begin(300.0);
        assert!(session.update(-12.0, 10.0));
        assert!(session.update(-2.0, 10.0));
        assert_eq!(session.target(), 298.0);
        assert_eq!(
            session.finish(None),
            DragOutcome::Pan { velocity: None }
        );
    }
}
