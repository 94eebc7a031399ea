//! Guard rails applied after loading.

use thiserror::Error;

/// A configuration value that would break an engine invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigGuardRailError {
    /// Tick period under the floor.
    #[error("carousel.tick_period_ms = {tick_period_ms} is below the {min_ms}ms floor")]
    TickPeriodTooShort {
        /// Configured period.
        tick_period_ms: u64,
        /// Lowest accepted period.
        min_ms: u64,
    },
    /// Settle delay not longer than the transition.
    #[error(
        "carousel settle delay ({settle_ms}ms) must exceed the transition ({transition_ms}ms) or the wraparound jump becomes visible"
    )]
    SettleNotAfterTransition {
        /// Effective settle delay.
        settle_ms: u64,
        /// Configured transition.
        transition_ms: u64,
    },
    /// Settle delay at or past the next tick.
    #[error(
        "carousel settle delay ({settle_ms}ms) must be shorter than the tick period ({tick_period_ms}ms)"
    )]
    SettleOutlastsTick {
        /// Effective settle delay.
        settle_ms: u64,
        /// Configured tick period.
        tick_period_ms: u64,
    },
    /// Drag slop not a positive number.
    #[error("panel.drag_slop_px must be a positive number, got {0}")]
    DragSlop(f32),
    /// Fling threshold not a positive number.
    #[error("panel.fling_velocity_px_s must be a positive number, got {0}")]
    FlingVelocity(f32),
    /// Map span not a positive number.
    #[error("panel.region_span_deg must be a positive number, got {0}")]
    RegionSpan(f64),
    /// Fractions out of `[0, 1]` or out of order.
    #[error(
        "panel.snap_fractions must satisfy 1 >= collapsed ({collapsed}) > half ({half}) > expanded ({expanded}) >= 0"
    )]
    SnapFractions {
        /// Configured collapsed fraction.
        collapsed: f32,
        /// Configured half fraction.
        half: f32,
        /// Configured expanded fraction.
        expanded: f32,
    },
}
