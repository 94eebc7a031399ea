//! Snap panel tuning.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use wayfarer_model::{ModelResult, SnapPoints};

use crate::constants::panel as defaults;
use crate::validation::ConfigGuardRailError;

/// Easing function type for snap animations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingKind {
    /// Constant speed.
    Linear,
    /// Quadratic, slow start.
    EaseIn,
    /// Quadratic, slow finish.
    #[default]
    EaseOut,
    /// Quadratic, slow at both ends.
    EaseInOut,
}

impl EasingKind {
    /// Every easing, for settings pickers.
    pub const ALL: [Self; 4] =
        [Self::Linear, Self::EaseIn, Self::EaseOut, Self::EaseInOut];

    /// Map linear progress `t` in `[0, 1]` through the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

impl fmt::Display for EasingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::EaseIn => write!(f, "Ease In"),
            Self::EaseOut => write!(f, "Ease Out"),
            Self::EaseInOut => write!(f, "Ease In/Out"),
        }
    }
}

/// Snap offsets as fractions of the viewport height, measured from the top
/// edge.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SnapFractions {
    /// Resting offset when collapsed.
    pub collapsed: f32,
    /// Resting offset at half height.
    pub half: f32,
    /// Resting offset when expanded.
    pub expanded: f32,
}

impl Default for SnapFractions {
    fn default() -> Self {
        Self {
            collapsed: defaults::COLLAPSED_FRACTION,
            half: defaults::HALF_FRACTION,
            expanded: defaults::EXPANDED_FRACTION,
        }
    }
}

/// Gesture thresholds and animation shape of the snapping panel.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PanelTuning {
    /// Total movement below which a drag is not captured as a pan, so taps on
    /// the handle keep working.
    pub drag_slop_px: f32,
    /// Release speed above which the panel moves one snap point in the
    /// direction of the fling instead of to the nearest one.
    pub fling_velocity_px_s: f32,
    /// Length of the snap animation.
    pub snap_duration_ms: u64,
    /// Curve of the snap animation.
    pub easing: EasingKind,
    /// Span of the map region shown when recentering on a selected item.
    pub region_span_deg: f64,
    /// Where the snap points sit relative to the viewport.
    pub snap_fractions: SnapFractions,
}

impl Default for PanelTuning {
    fn default() -> Self {
        Self {
            drag_slop_px: defaults::DRAG_SLOP_PX,
            fling_velocity_px_s: defaults::FLING_VELOCITY_PX_S,
            snap_duration_ms: defaults::SNAP_DURATION_MS,
            easing: EasingKind::default(),
            region_span_deg: defaults::REGION_SPAN_DEG,
            snap_fractions: SnapFractions::default(),
        }
    }
}

impl PanelTuning {
    /// [`Self::snap_duration_ms`] as a duration.
    pub fn snap_duration(&self) -> Duration {
        Duration::from_millis(self.snap_duration_ms)
    }

    /// Resolve the snap fractions against a concrete viewport height.
    pub fn snap_points(&self, viewport_height: f32) -> ModelResult<SnapPoints> {
        let f = self.snap_fractions;
        SnapPoints::new(
            f.collapsed * viewport_height,
            f.half * viewport_height,
            f.expanded * viewport_height,
        )
    }

    /// Check thresholds, span and fraction ordering.
    pub fn validate(&self) -> Result<(), ConfigGuardRailError> {
        if !(self.drag_slop_px.is_finite() && self.drag_slop_px > 0.0) {
            return Err(ConfigGuardRailError::DragSlop(self.drag_slop_px));
        }
        if !(self.fling_velocity_px_s.is_finite()
            && self.fling_velocity_px_s > 0.0)
        {
            return Err(ConfigGuardRailError::FlingVelocity(
                self.fling_velocity_px_s,
            ));
        }
        if !(self.region_span_deg.is_finite() && self.region_span_deg > 0.0) {
            return Err(ConfigGuardRailError::RegionSpan(self.region_span_deg));
        }
        let f = self.snap_fractions;
        let in_unit = |v: f32| (0.0..=1.0).contains(&v);
        if !(in_unit(f.collapsed)
            && in_unit(f.expanded)
            && f.collapsed > f.half
            && f.half > f.expanded)
        {
            return Err(ConfigGuardRailError::SnapFractions {
                collapsed: f.collapsed,
                half: f.half,
                expanded: f.expanded,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_model::PanelState;

    #[test]
    fn easing_curves_hit_endpoints() {
        for kind in EasingKind::ALL {
            assert_eq!(kind.apply(0.0), 0.0, "{kind}");
            assert_eq!(kind.apply(1.0), 1.0, "{kind}");
        }
        assert!(EasingKind::EaseOut.apply(0.5) > 0.5);
        assert!(EasingKind::EaseIn.apply(0.5) < 0.5);
        assert_eq!(EasingKind::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn snap_points_from_viewport() {
        let points = PanelTuning::default()
            .snap_points(800.0)
            .expect("defaults are ordered");
        assert_eq!(points[PanelState::Collapsed], 680.0);
        assert_eq!(points[PanelState::Half], 400.0);
        assert_eq!(points[PanelState::Expanded], 80.0);
    }

    #[test]
    fn guard_rails() {
        assert!(PanelTuning::default().validate().is_ok());

        let no_slop = PanelTuning {
            drag_slop_px: 0.0,
            ..PanelTuning::default()
        };
        assert_eq!(no_slop.validate(), Err(ConfigGuardRailError::DragSlop(0.0)));

        let inverted = PanelTuning {
            snap_fractions: SnapFractions {
                collapsed: 0.2,
                half: 0.5,
                expanded: 0.8,
            },
            ..PanelTuning::default()
        };
        assert!(matches!(
            inverted.validate(),
            Err(ConfigGuardRailError::SnapFractions { .. })
        ));
    }
}
