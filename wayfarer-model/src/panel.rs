//! Discrete panel positions and the offset table they resolve through.

use std::fmt;
use std::ops::Index;

use crate::{ModelError, ModelResult};

/// The three resting positions of a snapping panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PanelState {
    /// Mostly hidden; only the handle shows.
    #[default]
    Collapsed,
    /// About half of the viewport.
    Half,
    /// Nearly full height.
    Expanded,
}

impl PanelState {
    /// Ordered from the largest offset (collapsed) to the smallest.
    pub const ALL: [Self; 3] = [Self::Collapsed, Self::Half, Self::Expanded];

    const fn slot(self) -> usize {
        match self {
            Self::Collapsed => 0,
            Self::Half => 1,
            Self::Expanded => 2,
        }
    }

    /// Half or expanded.
    pub fn is_open(self) -> bool {
        !matches!(self, Self::Collapsed)
    }
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collapsed => write!(f, "collapsed"),
            Self::Half => write!(f, "half"),
            Self::Expanded => write!(f, "expanded"),
        }
    }
}

/// Pixel offsets of each [`PanelState`], measured from the reference edge.
/// Always satisfies `collapsed > half > expanded`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SnapPoints {
    offsets: [f32; 3],
}

impl SnapPoints {
    /// Build the table, rejecting non-finite or mis-ordered offsets.
    pub fn new(collapsed: f32, half: f32, expanded: f32) -> ModelResult<Self> {
        for (name, value) in
            [("collapsed", collapsed), ("half", half), ("expanded", expanded)]
        {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteOffset(name));
            }
        }
        if !(collapsed > half && half > expanded) {
            return Err(ModelError::SnapOrder {
                collapsed,
                half,
                expanded,
            });
        }
        Ok(Self {
            offsets: [collapsed, half, expanded],
        })
    }

    /// Offset of `state`; same as indexing.
    pub fn offset(&self, state: PanelState) -> f32 {
        self.offsets[state.slot()]
    }

    /// Largest offset (the collapsed position).
    pub fn max_offset(&self) -> f32 {
        self.offsets[PanelState::Collapsed.slot()]
    }

    /// Smallest offset (the expanded position).
    pub fn min_offset(&self) -> f32 {
        self.offsets[PanelState::Expanded.slot()]
    }

    /// Limit `offset` to the range between expanded and collapsed.
    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(self.min_offset(), self.max_offset())
    }

    /// Snap point with the minimal absolute distance to `offset`. Ties go to
    /// the more collapsed state.
    pub fn nearest(&self, offset: f32) -> PanelState {
        let mut best = PanelState::Collapsed;
        let mut best_distance = f32::INFINITY;
        for state in PanelState::ALL {
            let distance = (self.offset(state) - offset).abs();
            if distance < best_distance {
                best = state;
                best_distance = distance;
            }
        }
        best
    }

    /// First snap point strictly beyond `offset` in the direction of travel
    /// (`direction < 0` means toward expanded), falling back to the extreme
    /// in that direction.
    pub fn next_in_direction(&self, offset: f32, direction: f32) -> PanelState {
        if direction < 0.0 {
            PanelState::ALL
                .into_iter()
                .find(|s| self.offset(*s) < offset)
                .unwrap_or(PanelState::Expanded)
        } else {
            PanelState::ALL
                .into_iter()
                .rev()
                .find(|s| self.offset(*s) > offset)
                .unwrap_or(PanelState::Collapsed)
        }
    }

    /// States with their offsets, collapsed first.
    pub fn iter(&self) -> impl Iterator<Item = (PanelState, f32)> + '_ {
        PanelState::ALL.into_iter().map(|s| (s, self.offset(s)))
    }
}

impl Index<PanelState> for SnapPoints {
    type Output = f32;

    fn index(&self, state: PanelState) -> &Self::Output {
        &self.offsets[state.slot()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> SnapPoints {
        SnapPoints::new(600.0, 320.0, 80.0).expect("valid ordering")
    }

    #[test]
    fn rejects_unordered_offsets() {
        assert!(matches!(
            SnapPoints::new(100.0, 300.0, 50.0),
            Err(ModelError::SnapOrder { .. })
        ));
        assert!(matches!(
            SnapPoints::new(100.0, 100.0, 50.0),
            Err(ModelError::SnapOrder { .. })
        ));
        assert_eq!(
            SnapPoints::new(f32::NAN, 10.0, 0.0),
            Err(ModelError::NonFiniteOffset("collapsed"))
        );
    }

    #[test]
    fn table_lookup_by_state() {
        let p = points();
        assert_eq!(p[PanelState::Collapsed], 600.0);
        assert_eq!(p[PanelState::Half], 320.0);
        assert_eq!(p[PanelState::Expanded], 80.0);
        assert_eq!(p.clamp(-40.0), 80.0);
        assert_eq!(p.clamp(900.0), 600.0);
    }

    #[test]
    fn nearest_picks_minimal_distance() {
        let p = points();
        assert_eq!(p.nearest(590.0), PanelState::Collapsed);
        assert_eq!(p.nearest(400.0), PanelState::Half);
        assert_eq!(p.nearest(190.0), PanelState::Expanded);
        // 460 is equidistant from collapsed and half
        assert_eq!(p.nearest(460.0), PanelState::Collapsed);
    }

    #[test]
    fn directional_lookup() {
        let p = points();
        assert_eq!(p.next_in_direction(500.0, -1.0), PanelState::Half);
        assert_eq!(p.next_in_direction(300.0, -1.0), PanelState::Expanded);
        assert_eq!(p.next_in_direction(80.0, -1.0), PanelState::Expanded);
        assert_eq!(p.next_in_direction(300.0, 1.0), PanelState::Half);
        assert_eq!(p.next_in_direction(320.0, 1.0), PanelState::Collapsed);
        assert_eq!(p.next_in_direction(600.0, 1.0), PanelState::Collapsed);
    }
}
