//! Recording hosts shared by the integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::time::Instant;
use wayfarer_model::Region;
use wayfarer_motion::{CarouselHost, CompanionView, ItemId, PanelState, PanelSurface};

pub fn init_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// One `scroll_to` call, stamped with the (possibly paused) tokio clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scroll {
    pub at_ms: u64,
    pub offset: f32,
    pub animated: bool,
}

impl Scroll {
    pub fn new(at_ms: u64, offset: f32, animated: bool) -> Self {
        Self {
            at_ms,
            offset,
            animated,
        }
    }
}

/// Carousel host whose log outlives the engine task it is moved into.
#[derive(Debug, Clone)]
pub struct ScrollLog {
    started: Instant,
    scrolls: Arc<Mutex<Vec<Scroll>>>,
}

impl ScrollLog {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            scrolls: Arc::default(),
        }
    }

    pub fn snapshot(&self) -> Vec<Scroll> {
        self.scrolls.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.scrolls.lock().len()
    }
}

impl CarouselHost for ScrollLog {
    fn scroll_to(&mut self, offset: f32, animated: bool) {
        let at_ms = self.started.elapsed().as_millis() as u64;
        self.scrolls.lock().push(Scroll::new(at_ms, offset, animated));
    }
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub offsets: Vec<f32>,
    pub animations: Vec<f32>,
    pub scrolled_to: Vec<(usize, ItemId)>,
    pub highlighted: BTreeSet<ItemId>,
    pub states: Vec<PanelState>,
    pub selections: Vec<Option<ItemId>>,
}

impl PanelSurface for RecordingSurface {
    fn set_panel_offset(&mut self, offset: f32) {
        self.offsets.push(offset);
    }

    fn animate_panel_to(&mut self, offset: f32) {
        self.animations.push(offset);
    }

    fn scroll_list_to(&mut self, index: usize, id: &ItemId) {
        self.scrolled_to.push((index, id.clone()));
    }

    fn set_list_highlight(&mut self, id: &ItemId, highlighted: bool) {
        if highlighted {
            self.highlighted.insert(id.clone());
        } else {
            self.highlighted.remove(id);
        }
    }

    fn panel_state_changed(&mut self, state: PanelState) {
        self.states.push(state);
    }

    fn selection_changed(&mut self, selection: Option<&ItemId>) {
        self.selections.push(selection.cloned());
    }
}

#[derive(Debug, Default)]
pub struct RecordingMap {
    pub regions: Vec<Region>,
    pub highlighted: BTreeSet<ItemId>,
}

impl CompanionView for RecordingMap {
    fn animate_to_region(&mut self, region: Region) {
        self.regions.push(region);
    }

    fn set_marker_highlight(&mut self, id: &ItemId, highlighted: bool) {
        if highlighted {
            self.highlighted.insert(id.clone());
        } else {
            self.highlighted.remove(id);
        }
    }
}
