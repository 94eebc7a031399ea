//! Shared configuration library for Wayfarer.
//!
//! Centralizes the tuning knobs of the carousel engine and the snap panel
//! (periods, delays, thresholds), where they are loaded from, and the guard
//! rails that reject combinations that would make the seamless loop visible.

pub mod constants;
pub mod loader;
pub mod models;
pub mod validation;

pub use loader::MotionConfigSource;
pub use models::carousel::CarouselTuning;
pub use models::panel::{EasingKind, PanelTuning, SnapFractions};
pub use models::MotionConfig;
pub use validation::ConfigGuardRailError;
