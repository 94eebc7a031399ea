//! SnapPanelController: drag handling, snap resolution and selection sync.
//!
//! The panel rests at one of the offsets in a [`SnapPoints`] table. While a
//! drag is captured the panel follows the finger (clamped to the table's
//! range); on release it animates to a snap point and the discrete
//! [`PanelState`] is committed. The selected item is shared with a companion
//! map through [`SelectionSync`].

use std::time::Instant;

use wayfarer_config::PanelTuning;
use wayfarer_model::{DisplayItem, ItemId, PanelState, Region, SnapPoints};

use super::animator::SnapAnimator;
use super::gesture::{DragOutcome, DragSession};
use super::types::{CompanionView, PanelSurface};
use crate::MotionResult;
use crate::selection::{SelectionChange, SelectionSync};

#[derive(Debug)]
pub struct SnapPanelController<S, C> {
    tuning: PanelTuning,
    points: SnapPoints,
    items: Vec<DisplayItem>,

    state: PanelState,
    /// Committed offset: the live drag position, or the snap offset the
    /// panel is resting at / animating toward.
    offset: f32,
    drag: Option<DragSession>,
    animator: SnapAnimator,
    selection: SelectionSync,

    surface: S,
    companion: C,
}

impl<S, C> SnapPanelController<S, C>
where
    S: PanelSurface,
    C: CompanionView,
{
    pub fn new(
        tuning: PanelTuning,
        points: SnapPoints,
        initial: PanelState,
        surface: S,
        companion: C,
    ) -> MotionResult<Self> {
        tuning.validate()?;
        Ok(Self {
            tuning,
            points,
            items: Vec::new(),
            state: initial,
            offset: points[initial],
            drag: None,
            animator: SnapAnimator::new(),
            selection: SelectionSync::new(),
            surface,
            companion,
        })
    }

    /// Build with snap offsets derived from the viewport height through the
    /// tuning's snap fractions.
    pub fn for_viewport(
        tuning: PanelTuning,
        viewport_height: f32,
        initial: PanelState,
        surface: S,
        companion: C,
    ) -> MotionResult<Self> {
        let points = tuning.snap_points(viewport_height)?;
        Self::new(tuning, points, initial, surface, companion)
    }

    pub fn with_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.items = items;
        self
    }

    /// Replace the item collection. A selection whose item disappeared is
    /// cleared in both views.
    pub fn set_items(&mut self, items: Vec<DisplayItem>) {
        self.items = items;
        let stale = self
            .selection
            .current()
            .is_some_and(|id| self.position_of(id).is_none());
        if stale {
            log::debug!("selected item left the collection; clearing");
            self.clear_selection();
        }
    }

    /// Viewport resized: move to the same state's new offset without
    /// animating.
    pub fn set_snap_points(&mut self, points: SnapPoints) {
        self.points = points;
        self.animator.cancel();
        match self.drag {
            Some(session) if session.is_captured() => {
                self.offset = self.points.clamp(session.target());
            }
            _ => self.offset = self.points[self.state],
        }
        self.surface.set_panel_offset(self.offset);
    }

    /// Finger down on the panel handle.
    pub fn on_drag_start(&mut self) {
        self.on_drag_start_at(Instant::now());
    }

    /// [`Self::on_drag_start`] with an explicit clock. An in-flight snap
    /// animation is interrupted where it currently is.
    pub fn on_drag_start_at(&mut self, now: Instant) {
        if let Some(visual) = self.animator.sample(now) {
            self.offset = visual;
        }
        self.animator.cancel();
        self.drag = Some(DragSession::begin(self.offset));
        log::trace!("panel drag start at {}", self.offset);
    }

    /// Total vertical movement since the drag began. Free-follow: no
    /// snapping happens here. Movement under the slop threshold is not
    /// captured, so a tap on the handle stays a tap.
    pub fn on_drag_move(&mut self, delta_y: f32) {
        let slop = self.tuning.drag_slop_px;
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        if !session.update(delta_y, slop) {
            return;
        }
        let offset = self.points.clamp(session.target());
        if offset != self.offset {
            self.offset = offset;
            self.surface.set_panel_offset(offset);
        }
    }

    /// Finger up. Settles on the snap point nearest to the current offset.
    pub fn on_drag_release(&mut self) -> PanelState {
        self.on_drag_release_with_velocity(None)
    }

    /// Finger up with the release velocity (px/s, positive toward
    /// collapsed). A fling faster than the tuning's threshold moves to the
    /// next snap point in its direction instead of the nearest one.
    pub fn on_drag_release_with_velocity(
        &mut self,
        velocity: Option<f32>,
    ) -> PanelState {
        let Some(session) = self.drag.take() else {
            return self.state;
        };
        match session.finish(velocity) {
            DragOutcome::Tap => {
                log::trace!("panel drag below slop; treated as tap");
                // A tap that interrupted a snap animation finishes it.
                if self.offset != self.points[self.state] {
                    return self.snap_to(self.state);
                }
                self.state
            }
            DragOutcome::Pan { velocity } => {
                let target = self.resolve_snap(velocity);
                self.snap_to(target)
            }
        }
    }

    /// Tap on an item in the list: select it and recenter the map on it.
    /// The panel stays where it is.
    pub fn on_item_select(&mut self, id: impl Into<ItemId>) {
        let id = id.into();
        let Some(index) = self.position_of(&id) else {
            log::debug!("item select for unknown id {id}; ignored");
            return;
        };
        self.select(Some(id));
        if let Some(location) = self.items[index].location {
            let region = Region::around(location, self.tuning.region_span_deg);
            self.companion.animate_to_region(region);
        }
    }

    /// Tap on a map marker: select the item, bring it into view in the list
    /// and expand the panel.
    pub fn on_marker_select(&mut self, id: impl Into<ItemId>) {
        let id = id.into();
        let Some(index) = self.position_of(&id) else {
            log::debug!("marker select for unknown id {id}; ignored");
            return;
        };
        self.select(Some(id.clone()));
        self.surface.scroll_list_to(index, &id);
        self.snap_to(PanelState::Expanded);
    }

    /// Tap on empty map area: get the panel out of the way.
    pub fn on_companion_tap(&mut self) {
        if self.state.is_open() {
            self.snap_to(PanelState::Collapsed);
        }
    }

    pub fn clear_selection(&mut self) {
        self.select(None);
    }

    /// Animate to `state` and commit it. Any drag in progress is dropped.
    pub fn snap_to(&mut self, state: PanelState) -> PanelState {
        self.snap_to_at(state, Instant::now())
    }

    pub fn snap_to_at(&mut self, state: PanelState, now: Instant) -> PanelState {
        self.drag = None;
        let from = self.animator.sample(now).unwrap_or(self.offset);
        let target = self.points[state];
        self.offset = target;
        self.animator.start(
            from,
            target,
            self.tuning.snap_duration(),
            self.tuning.easing,
            now,
        );
        self.surface.animate_panel_to(target);

        if state != self.state {
            log::debug!("panel {} -> {}", self.state, state);
            self.state = state;
            self.surface.panel_state_changed(state);
        }
        state
    }

    /// Interpolated offset for hosts that render frames themselves. `None`
    /// once the snap animation has finished.
    pub fn frame(&mut self, now: Instant) -> Option<f32> {
        self.animator.tick(now)
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn snap_points(&self) -> &SnapPoints {
        &self.points
    }

    pub fn selection(&self) -> Option<&ItemId> {
        self.selection.current()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some_and(|session| session.is_captured())
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn companion(&self) -> &C {
        &self.companion
    }

    fn resolve_snap(&self, velocity: Option<f32>) -> PanelState {
        match velocity {
            Some(v)
                if v.is_finite()
                    && v.abs() >= self.tuning.fling_velocity_px_s =>
            {
                self.points.next_in_direction(self.offset, v)
            }
            _ => self.points.nearest(self.offset),
        }
    }

    fn select(&mut self, id: Option<ItemId>) {
        let Some(change) = self.selection.select(id) else {
            return;
        };
        self.broadcast(&change);
    }

    fn broadcast(&mut self, change: &SelectionChange) {
        let surface = &mut self.surface;
        change.apply_to(|id, on| surface.set_list_highlight(id, on));
        let companion = &mut self.companion;
        change.apply_to(|id, on| companion.set_marker_highlight(id, on));
        self.surface.selection_changed(change.current.as_ref());
    }

    fn position_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }
}
