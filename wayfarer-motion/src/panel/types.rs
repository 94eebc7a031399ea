//! Host-facing surfaces of the snap panel

use wayfarer_model::{ItemId, PanelState, Region};

/// The panel itself and the item list it contains.
pub trait PanelSurface {
    /// Follow the finger: place the panel at `offset` immediately.
    fn set_panel_offset(&mut self, offset: f32);

    /// Animate (spring-like) the panel to a snap offset.
    fn animate_panel_to(&mut self, offset: f32);

    /// Scroll the list so the item at `index` is visible.
    fn scroll_list_to(&mut self, index: usize, id: &ItemId);

    fn set_list_highlight(&mut self, id: &ItemId, highlighted: bool);

    fn panel_state_changed(&mut self, _state: PanelState) {}

    fn selection_changed(&mut self, _selection: Option<&ItemId>) {}
}

/// The companion spatial view (map).
pub trait CompanionView {
    fn animate_to_region(&mut self, region: Region);

    fn set_marker_highlight(&mut self, id: &ItemId, highlighted: bool);
}

impl<S: PanelSurface + ?Sized> PanelSurface for &mut S {
    fn set_panel_offset(&mut self, offset: f32) {
        (**self).set_panel_offset(offset)
    }

    fn animate_panel_to(&mut self, offset: f32) {
        (**self).animate_panel_to(offset)
    }

    fn scroll_list_to(&mut self, index: usize, id: &ItemId) {
        (**self).scroll_list_to(index, id)
    }

    fn set_list_highlight(&mut self, id: &ItemId, highlighted: bool) {
        (**self).set_list_highlight(id, highlighted)
    }

    fn panel_state_changed(&mut self, state: PanelState) {
        (**self).panel_state_changed(state)
    }

    fn selection_changed(&mut self, selection: Option<&ItemId>) {
        (**self).selection_changed(selection)
    }
}

impl<C: CompanionView + ?Sized> CompanionView for &mut C {
    fn animate_to_region(&mut self, region: Region) {
        (**self).animate_to_region(region)
    }

    fn set_marker_highlight(&mut self, id: &ItemId, highlighted: bool) {
        (**self).set_marker_highlight(id, highlighted)
    }
}
