//! CarouselEngine: logical index, offset and the single pending timer.
//!
//! Index space is the rendered `3N` sequence. The engine starts at `N` (first
//! slide of the middle copy) and only ever advances forward. Reaching `2N`
//! means the view now shows the trailing copy's first slide, which is
//! pixel-identical to slide `N`; once the animated advance has settled the
//! engine jumps back by `N` without animation.

use wayfarer_config::CarouselTuning;
use wayfarer_model::slide::SEAMLESS_COPIES;

use super::messages::CarouselEvent;
use super::types::{CarouselHost, CarouselPhase, PendingStep};
use crate::MotionResult;
use crate::timer::{TimerDriver, TimerFired, TimerHandle, TimerSpec};

#[derive(Debug)]
struct Armed {
    handle: TimerHandle,
    step: PendingStep,
}

/// Drives one auto-advancing, seamlessly looping carousel.
#[derive(Debug)]
pub struct CarouselEngine<H, T> {
    tuning: CarouselTuning,
    timers: T,
    host: H,

    slide_count: usize,
    page_width: f32,
    /// Logical index in the rendered sequence (single source of truth).
    index: usize,
    /// Last offset commanded to the host; always `index * page_width`.
    offset: f32,
    /// Last offset the scrollable reported, if any.
    reported_offset: Option<f32>,

    phase: CarouselPhase,
    armed: Option<Armed>,
}

impl<H, T> CarouselEngine<H, T>
where
    H: CarouselHost,
    T: TimerDriver,
{
    /// Build an engine. Nothing is armed until [`Self::initialize`].
    pub fn new(tuning: CarouselTuning, timers: T, host: H) -> MotionResult<Self> {
        tuning.validate()?;
        Ok(Self {
            tuning,
            timers,
            host,
            slide_count: 0,
            page_width: 0.0,
            index: 0,
            offset: 0.0,
            reported_offset: None,
            phase: CarouselPhase::Disabled,
            armed: None,
        })
    }

    /// Position the view on the first slide of the middle copy and start
    /// auto-advancing. Any previously armed timer is cancelled first.
    ///
    /// With `slide_count == 0` the engine stays disabled and arms nothing.
    /// While a drag is in progress the new layout is only recorded: nothing
    /// scrolls or arms until the drag ends.
    pub fn initialize(&mut self, slide_count: usize, page_width: f32) {
        if self.phase == CarouselPhase::TornDown {
            log::debug!("carousel initialize after teardown ignored");
            return;
        }
        self.cancel_timer();
        self.page_width = sanitize_width(page_width);
        self.slide_count = slide_count;
        self.index = slide_count;
        self.offset = self.offset_for(self.index);

        if self.phase == CarouselPhase::Paused {
            log::debug!(
                "carousel re-based mid-drag: slides={} index={}",
                slide_count,
                self.index
            );
            return;
        }

        if slide_count == 0 {
            self.phase = CarouselPhase::Disabled;
            log::debug!("carousel has no slides; auto-advance disabled");
            return;
        }

        self.host.scroll_to(self.offset, false);
        self.host.index_changed(self.index);
        self.arm(PendingStep::Advance);
        self.phase = CarouselPhase::Idle;
        log::debug!(
            "carousel initialized: slides={} page_width={} index={}",
            slide_count,
            self.page_width,
            self.index
        );
    }

    /// Reinitialize for a new data length. No-op when the count is unchanged.
    pub fn resize(&mut self, slide_count: usize) {
        if self.phase == CarouselPhase::TornDown
            || slide_count == self.slide_count
        {
            return;
        }
        log::debug!(
            "carousel slide count {} -> {}",
            self.slide_count,
            slide_count
        );
        self.initialize(slide_count, self.page_width);
    }

    /// Viewport width changed: keep the same slide under the viewport.
    pub fn set_page_width(&mut self, page_width: f32) {
        if self.phase == CarouselPhase::TornDown {
            return;
        }
        self.page_width = sanitize_width(page_width);
        if self.slide_count == 0 {
            return;
        }
        if self.phase == CarouselPhase::Paused {
            // The finger owns the scroll position until release.
            self.offset = self.offset_for(self.index);
            return;
        }
        self.jump_to_index();
    }

    /// Advance one slide with animation. Invoked by the periodic timer; a
    /// direct call outside [`CarouselPhase::Idle`] does nothing.
    ///
    /// Returns whether the engine advanced.
    pub fn tick(&mut self) -> bool {
        if self.phase != CarouselPhase::Idle {
            log::trace!("carousel tick ignored in phase {}", self.phase);
            return false;
        }

        self.index += 1;
        self.offset = self.offset_for(self.index);
        self.host.scroll_to(self.offset, true);
        self.host.index_changed(self.index);
        log::trace!("carousel advanced to {}", self.index);

        if self.index >= self.wrap_threshold() {
            // The periodic advance is replaced by the settle-reset; it is
            // rearmed once the jump back has happened.
            self.arm(PendingStep::SettleReset);
            self.phase = CarouselPhase::Settling;
        }
        true
    }

    /// User put a finger on the carousel. Cancels whatever is pending.
    pub fn on_drag_start(&mut self) {
        if matches!(
            self.phase,
            CarouselPhase::TornDown | CarouselPhase::Disabled
        ) {
            return;
        }
        self.cancel_timer();
        if self.phase != CarouselPhase::Paused {
            log::debug!("carousel paused at index {}", self.index);
        }
        self.phase = CarouselPhase::Paused;
    }

    /// User released the carousel at `final_offset`. Commits the nearest
    /// slide and schedules exactly one follow-up: the settle-reset when the
    /// drag ended on the trailing copy, otherwise the quiet-delay resume.
    ///
    /// A non-finite `final_offset` falls back to the last offset the
    /// scrollable reported through [`Self::on_content_offset_changed`].
    pub fn on_drag_end(&mut self, final_offset: f32) {
        if matches!(
            self.phase,
            CarouselPhase::TornDown | CarouselPhase::Disabled
        ) {
            return;
        }
        self.cancel_timer();

        if self.slide_count == 0 {
            // Emptied mid-drag.
            self.phase = CarouselPhase::Disabled;
            return;
        }

        let final_offset = if final_offset.is_finite() {
            final_offset
        } else {
            self.reported_offset.unwrap_or(self.offset)
        };
        let nearest = self.nearest_index(final_offset);
        let changed = nearest != self.index;
        self.index = nearest;
        self.offset = self.offset_for(nearest);
        if (final_offset - self.offset).abs() > f32::EPSILON {
            self.host.scroll_to(self.offset, true);
        }
        if changed {
            self.host.index_changed(self.index);
        }

        if self.index >= self.wrap_threshold() {
            self.arm(PendingStep::SettleReset);
            self.phase = CarouselPhase::Settling;
        } else {
            self.arm(PendingStep::Resume);
            self.phase = CarouselPhase::Quiet;
        }
        log::debug!(
            "carousel drag ended at {final_offset} -> index {} ({})",
            self.index,
            self.phase
        );
    }

    /// Content offset reported by the scrollable.
    pub fn on_content_offset_changed(&mut self, offset: f32) {
        self.reported_offset = Some(offset);
    }

    /// Route a timer firing back into the engine. Firings that do not belong
    /// to the live handle (cancelled, superseded, or another engine's) are
    /// ignored. Returns whether the firing was accepted.
    pub fn handle_timer(&mut self, fired: TimerFired) -> bool {
        let step = match &self.armed {
            Some(armed) if armed.handle.matches(&fired) => armed.step,
            _ => {
                log::trace!("carousel ignoring stale {}", fired.id);
                return false;
            }
        };

        match step {
            PendingStep::Advance => {
                self.tick();
            }
            PendingStep::SettleReset => {
                self.armed = None;
                self.settle_reset();
            }
            PendingStep::Resume => {
                self.armed = None;
                log::debug!("carousel resuming after quiet period");
                self.arm(PendingStep::Advance);
                self.phase = CarouselPhase::Idle;
            }
        }
        true
    }

    /// Dispatch a host event.
    pub fn apply(&mut self, event: CarouselEvent) {
        match event {
            CarouselEvent::DragStart => self.on_drag_start(),
            CarouselEvent::DragEnd { offset } => self.on_drag_end(offset),
            CarouselEvent::ContentOffset(offset) => {
                self.on_content_offset_changed(offset)
            }
            CarouselEvent::Resize { slide_count } => self.resize(slide_count),
            CarouselEvent::PageWidth(width) => self.set_page_width(width),
            CarouselEvent::Unmount => self.teardown(),
        }
    }

    /// Host unmounted: cancel the timer and ignore everything from now on.
    pub fn teardown(&mut self) {
        if self.phase == CarouselPhase::TornDown {
            return;
        }
        self.cancel_timer();
        self.phase = CarouselPhase::TornDown;
        log::debug!("carousel torn down at index {}", self.index);
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn reported_offset(&self) -> Option<f32> {
        self.reported_offset
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    pub fn tuning(&self) -> &CarouselTuning {
        &self.tuning
    }

    /// Logical slide (`0..N`) currently under the viewport.
    pub fn visible_slide(&self) -> Option<usize> {
        (self.slide_count > 0).then(|| self.index % self.slide_count)
    }

    pub fn has_pending_timer(&self) -> bool {
        self.armed.is_some()
    }

    /// Label of the pending timer, for diagnostics.
    pub fn pending_label(&self) -> Option<&'static str> {
        self.armed.as_ref().map(|armed| armed.handle.label())
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }


    fn settle_reset(&mut self) {
        let n = self.slide_count;
        if n > 0 && self.index >= self.wrap_threshold() {
            let from = self.index;
            self.index -= n;
            self.jump_to_index();
            self.host.index_changed(self.index);
            log::debug!("carousel wrapped {from} -> {}", self.index);
        }
        self.arm(PendingStep::Advance);
        self.phase = CarouselPhase::Idle;
    }

    fn arm(&mut self, step: PendingStep) {
        self.cancel_timer();
        let spec = match step {
            PendingStep::Advance => {
                TimerSpec::every(self.tuning.tick_period(), step.label())
            }
            PendingStep::SettleReset => {
                TimerSpec::once(self.tuning.settle_delay(), step.label())
            }
            PendingStep::Resume => {
                TimerSpec::once(self.tuning.quiet_delay(), step.label())
            }
        };
        let handle = self.timers.arm(spec);
        log::trace!("carousel armed {} ({})", handle.id(), step.label());
        self.armed = Some(Armed { handle, step });
    }

    fn cancel_timer(&mut self) {
        if let Some(armed) = self.armed.take() {
            armed.handle.cancel();
        }
    }

    fn jump_to_index(&mut self) {
        self.offset = self.offset_for(self.index);
        self.host.scroll_to(self.offset, false);
    }

    fn wrap_threshold(&self) -> usize {
        self.slide_count * 2
    }

    fn offset_for(&self, index: usize) -> f32 {
        index as f32 * self.page_width
    }

    fn nearest_index(&self, offset: f32) -> usize {
        if self.page_width <= 0.0 || !offset.is_finite() {
            return self.index;
        }
        let last = (self.slide_count * SEAMLESS_COPIES).saturating_sub(1);
        let raw = (offset / self.page_width).round();
        raw.clamp(0.0, last as f32) as usize
    }
}

fn sanitize_width(width: f32) -> f32 {
    if width.is_finite() && width >= 0.0 {
        width
    } else {
        log::warn!("carousel page width {width} is not usable; using 0");
        0.0
    }
}
