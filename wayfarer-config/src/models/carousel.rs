//! Carousel timing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::carousel as defaults;
use crate::validation::ConfigGuardRailError;

/// Timing of an auto-advancing carousel.
///
/// The settle delay is the wait between starting the animated advance onto
/// the duplicate slide and jumping back to the middle copy. It must outlast
/// the host's transition, otherwise the jump lands mid-animation and the
/// seam shows. When `settle_delay_ms` is unset it is derived as
/// `transition_ms + settle_margin_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselTuning {
    /// Period between automatic advances.
    pub tick_period_ms: u64,
    /// Quiet time after the user releases a drag before advancing resumes.
    pub quiet_delay_ms: u64,
    /// How long the host's animated `scroll_to` takes.
    pub transition_ms: u64,
    /// Margin added to `transition_ms` when deriving the settle delay.
    pub settle_margin_ms: u64,
    /// Explicit settle delay override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settle_delay_ms: Option<u64>,
}

impl Default for CarouselTuning {
    fn default() -> Self {
        Self {
            tick_period_ms: defaults::TICK_PERIOD_MS,
            quiet_delay_ms: defaults::QUIET_DELAY_MS,
            transition_ms: defaults::TRANSITION_MS,
            settle_margin_ms: defaults::SETTLE_MARGIN_MS,
            settle_delay_ms: None,
        }
    }
}

impl CarouselTuning {
    /// Full-width hero banner on the landing screen: slower cadence, long
    /// quiet period so a user reading an offer is not interrupted.
    pub const fn hero_banner() -> Self {
        Self {
            tick_period_ms: 4_500,
            quiet_delay_ms: 5_000,
            transition_ms: 350,
            settle_margin_ms: 100,
            settle_delay_ms: None,
        }
    }

    /// Strip of destination cards (several items per slide).
    pub const fn destination_strip() -> Self {
        Self {
            tick_period_ms: 3_000,
            quiet_delay_ms: 4_000,
            transition_ms: 300,
            settle_margin_ms: 100,
            settle_delay_ms: None,
        }
    }

    /// [`Self::tick_period_ms`] as a duration.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// [`Self::quiet_delay_ms`] as a duration.
    pub fn quiet_delay(&self) -> Duration {
        Duration::from_millis(self.quiet_delay_ms)
    }

    /// [`Self::transition_ms`] as a duration.
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Explicit settle delay, or transition plus margin.
    pub fn settle_delay(&self) -> Duration {
        let ms = self.settle_delay_ms.unwrap_or_else(|| {
            self.transition_ms.saturating_add(self.settle_margin_ms)
        });
        Duration::from_millis(ms)
    }

    /// Check the tick floor and the settle window.
    pub fn validate(&self) -> Result<(), ConfigGuardRailError> {
        if self.tick_period_ms < defaults::MIN_TICK_PERIOD_MS {
            return Err(ConfigGuardRailError::TickPeriodTooShort {
                tick_period_ms: self.tick_period_ms,
                min_ms: defaults::MIN_TICK_PERIOD_MS,
            });
        }
        let settle_ms = self.settle_delay().as_millis() as u64;
        if settle_ms <= self.transition_ms {
            return Err(ConfigGuardRailError::SettleNotAfterTransition {
                settle_ms,
                transition_ms: self.transition_ms,
            });
        }
        // The next advance must not start before the previous wrap reset ran.
        if settle_ms >= self.tick_period_ms {
            return Err(ConfigGuardRailError::SettleOutlastsTick {
                settle_ms,
                tick_period_ms: self.tick_period_ms,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_delay_is_derived_from_transition() {
        let tuning = CarouselTuning::default();
        assert_eq!(tuning.settle_delay(), Duration::from_millis(400));
        assert!(tuning.settle_delay() > tuning.transition());
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn explicit_settle_delay_wins() {
        let tuning = CarouselTuning {
            settle_delay_ms: Some(650),
            ..CarouselTuning::default()
        };
        assert_eq!(tuning.settle_delay(), Duration::from_millis(650));
    }

    #[test]
    fn presets_pass_guard_rails() {
        assert!(CarouselTuning::hero_banner().validate().is_ok());
        assert!(CarouselTuning::destination_strip().validate().is_ok());
    }

    #[test]
    fn settle_shorter_than_transition_is_rejected() {
        let tuning = CarouselTuning {
            transition_ms: 400,
            settle_delay_ms: Some(350),
            ..CarouselTuning::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(ConfigGuardRailError::SettleNotAfterTransition {
                settle_ms: 350,
                transition_ms: 400,
            })
        );
    }

    #[test]
    fn tick_period_guard_rails() {
        let too_fast = CarouselTuning {
            tick_period_ms: 100,
            ..CarouselTuning::default()
        };
        assert!(matches!(
            too_fast.validate(),
            Err(ConfigGuardRailError::TickPeriodTooShort { .. })
        ));

        let overlapping = CarouselTuning {
            tick_period_ms: 300,
            transition_ms: 250,
            settle_margin_ms: 100,
            ..CarouselTuning::default()
        };
        assert!(matches!(
            overlapping.validate(),
            Err(ConfigGuardRailError::SettleOutlastsTick { .. })
        ));
    }
}
