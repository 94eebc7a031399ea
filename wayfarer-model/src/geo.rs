//! Coordinates consumed by the companion spatial view.

/// A WGS84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Degrees north, `-90..=90`.
    pub latitude: f64,
    /// Degrees east, `-180..=180`.
    pub longitude: f64,
}

impl GeoPoint {
    /// Point from latitude and longitude in degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A visible map region: a center plus the latitude/longitude spans shown
/// around it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Center of the visible area.
    pub center: GeoPoint,
    /// Latitude span in degrees.
    pub latitude_delta: f64,
    /// Longitude span in degrees.
    pub longitude_delta: f64,
}

impl Region {
    /// Square region of `span` degrees centered on `center`.
    pub fn around(center: GeoPoint, span: f64) -> Self {
        let span = span.abs();
        Self {
            center,
            latitude_delta: span,
            longitude_delta: span,
        }
    }

    /// True when `point` lies inside the region (edges included).
    pub fn contains(&self, point: GeoPoint) -> bool {
        let half_lat = self.latitude_delta / 2.0;
        let half_lon = self.longitude_delta / 2.0;
        (point.latitude - self.center.latitude).abs() <= half_lat
            && (point.longitude - self.center.longitude).abs() <= half_lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_around_contains_center_and_rejects_far_points() {
        let center = GeoPoint::new(48.8566, 2.3522);
        let region = Region::around(center, -0.1);

        assert_eq!(region.latitude_delta, 0.1);
        assert!(region.contains(center));
        assert!(region.contains(GeoPoint::new(48.9, 2.39)));
        assert!(!region.contains(GeoPoint::new(49.0, 2.3522)));
    }
}
