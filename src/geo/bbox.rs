use super::GeoPoint;
use crate::error::{CensusqError, Result};

/// Minimal rectangle (min/max longitude and latitude) enclosing a set of
/// points, used to frame the map view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_long: f64,
    pub min_lat: f64,
    pub max_long: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn from_points(points: &[GeoPoint]) -> Result<Self> {
        let first = points.first().ok_or_else(|| {
            CensusqError::Geometry("cannot compute bounding box of zero points".to_string())
        })?;

        let mut bounds = Self {
            min_long: first.long,
            min_lat: first.lat,
            max_long: first.long,
            max_lat: first.lat,
        };

        for point in &points[1..] {
            bounds.min_long = bounds.min_long.min(point.long);
            bounds.min_lat = bounds.min_lat.min(point.lat);
            bounds.max_long = bounds.max_long.max(point.long);
            bounds.max_lat = bounds.max_lat.max(point.lat);
        }

        Ok(bounds)
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_long + self.max_long) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    pub fn long_span(&self) -> f64 {
        self.max_long - self.min_long
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encloses_all_points() {
        let points = vec![
            GeoPoint::new("94105", 37.789, -122.395),
            GeoPoint::new("94110", 37.750, -122.415),
            GeoPoint::new("10001", 40.750, -73.997),
        ];

        let bounds = BoundingBox::from_points(&points).unwrap();
        assert_eq!(bounds.min_long, -122.415);
        assert_eq!(bounds.max_long, -73.997);
        assert_eq!(bounds.min_lat, 37.750);
        assert_eq!(bounds.max_lat, 40.750);
    }

    #[test]
    fn center_is_midpoint() {
        let points = vec![
            GeoPoint::new("a", 10.0, 20.0),
            GeoPoint::new("b", 30.0, 40.0),
        ];
        let bounds = BoundingBox::from_points(&points).unwrap();
        assert_eq!(bounds.center(), (30.0, 20.0));
    }

    #[test]
    fn empty_point_set_is_an_error() {
        assert!(BoundingBox::from_points(&[]).is_err());
    }
}
