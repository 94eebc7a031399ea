//! Tuning models, one per engine.

pub mod carousel;
pub mod panel;

use serde::{Deserialize, Serialize};

use crate::validation::ConfigGuardRailError;

pub use carousel::CarouselTuning;
pub use panel::PanelTuning;

/// Top-level motion settings for one host screen.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Auto-advancing carousel timing.
    pub carousel: CarouselTuning,
    /// Snap panel gestures and animation.
    pub panel: PanelTuning,
}

impl MotionConfig {
    /// Run every guard rail and report the first violation.
    pub fn validate(&self) -> Result<(), ConfigGuardRailError> {
        self.carousel.validate()?;
        self.panel.validate()
    }
}
