//! Compiled defaults. Tuning should happen here so every screen that embeds
//! a carousel or a panel moves the same way.

/// Auto-advancing carousel timing.
pub mod carousel {
    /// Period between automatic advances (ms).
    pub const TICK_PERIOD_MS: u64 = 3_500;
    /// Quiet time after a drag before auto-advance resumes (ms).
    pub const QUIET_DELAY_MS: u64 = 4_500;
    /// Duration of the host's animated page transition (ms).
    pub const TRANSITION_MS: u64 = 300;
    /// Extra wait past the transition before the invisible wraparound reset
    /// may run (ms).
    pub const SETTLE_MARGIN_MS: u64 = 100;
    /// Lower bound accepted for the tick period (ms).
    pub const MIN_TICK_PERIOD_MS: u64 = 250;
}

/// Snap panel gestures and animation.
pub mod panel {
    /// Movement (px) below which a drag on the handle stays a tap.
    pub const DRAG_SLOP_PX: f32 = 10.0;
    /// Release velocity (px/s) above which a fling picks the next snap point
    /// in the direction of travel.
    pub const FLING_VELOCITY_PX_S: f32 = 1_200.0;
    /// Snap animation duration (ms).
    pub const SNAP_DURATION_MS: u64 = 280;
    /// Latitude/longitude span (degrees) used when recentering the map on an
    /// item.
    pub const REGION_SPAN_DEG: f64 = 0.05;
    /// Collapsed snap offset as a fraction of the viewport height.
    pub const COLLAPSED_FRACTION: f32 = 0.85;
    /// Half snap offset as a fraction of the viewport height.
    pub const HALF_FRACTION: f32 = 0.5;
    /// Expanded snap offset as a fraction of the viewport height.
    pub const EXPANDED_FRACTION: f32 = 0.1;
}

/// Environment and file lookup for the loader.
pub mod env {
    /// Path of a TOML or JSON config file.
    pub const CONFIG_PATH_VAR: &str = "WAYFARER_MOTION_CONFIG_PATH";
    /// Inline JSON config.
    pub const CONFIG_JSON_VAR: &str = "WAYFARER_MOTION_CONFIG_JSON";
    /// Files probed in the working directory, in order.
    pub const DEFAULT_FILES: &[&str] = &[
        "motion.toml",
        "motion.json",
        "config/motion.toml",
        "config/motion.json",
    ];
}
