//! Shared types for the carousel module

use std::fmt;

/// The scrollable view a carousel drives, plus the optional telemetry hook.
pub trait CarouselHost {
    /// Move the horizontal scroll position. `animated == false` must apply
    /// the offset immediately, in the same frame.
    fn scroll_to(&mut self, offset: f32, animated: bool);

    /// The logical index changed. Debugging/telemetry only.
    fn index_changed(&mut self, _index: usize) {}
}

impl<H: CarouselHost + ?Sized> CarouselHost for &mut H {
    fn scroll_to(&mut self, offset: f32, animated: bool) {
        (**self).scroll_to(offset, animated)
    }

    fn index_changed(&mut self, index: usize) {
        (**self).index_changed(index)
    }
}

impl<H: CarouselHost + ?Sized> CarouselHost for Box<H> {
    fn scroll_to(&mut self, offset: f32, animated: bool) {
        (**self).scroll_to(offset, animated)
    }

    fn index_changed(&mut self, index: usize) {
        (**self).index_changed(index)
    }
}

/// Where the engine is in its advance/pause cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarouselPhase {
    /// Not initialized yet, or initialized with zero slides. No timer.
    #[default]
    Disabled,
    /// Periodic advance timer armed.
    Idle,
    /// Animated onto a trailing duplicate; the invisible reset back into the
    /// middle copy is armed for after the settle delay.
    Settling,
    /// User is dragging. No timer.
    Paused,
    /// Drag released; the resume timer (quiet delay) is armed.
    Quiet,
    /// Host unmounted. Every further event is a no-op.
    TornDown,
}

impl CarouselPhase {
    /// Phases in which exactly one timer is expected to be armed.
    pub fn expects_timer(self) -> bool {
        matches!(self, Self::Idle | Self::Settling | Self::Quiet)
    }
}

impl fmt::Display for CarouselPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disabled => "disabled",
            Self::Idle => "idle",
            Self::Settling => "settling",
            Self::Paused => "paused",
            Self::Quiet => "quiet",
            Self::TornDown => "torn-down",
        };
        f.write_str(name)
    }
}

/// The follow-up a pending timer stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PendingStep {
    /// Periodic: advance one slide.
    Advance,
    /// Single-shot: jump from the trailing duplicate back to the middle copy,
    /// then rearm the periodic advance.
    SettleReset,
    /// Single-shot: quiet period after a drag is over; rearm the advance.
    Resume,
}

impl PendingStep {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Advance => "carousel-advance",
            Self::SettleReset => "carousel-settle-reset",
            Self::Resume => "carousel-resume",
        }
    }
}
