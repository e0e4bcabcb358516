use crate::geo::BoundingBox;
use serde::{Deserialize, Serialize};

/// Padding and animation length applied on every bounds fit, matching the
/// map provider's `fitBounds` options.
pub const FIT_PADDING: u32 = 100;
pub const FIT_DURATION_MS: u64 = 1000;

const MIN_ZOOM: f64 = 1.0;
const MAX_ZOOM: f64 = 15.0;

/// Map camera parameters. Mutated only by bounding-box fits after a
/// successful query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
}

impl Default for ViewState {
    /// Continental-US framing shown before the first query.
    fn default() -> Self {
        Self {
            longitude: -98.2177715,
            latitude: 38.651327165999525,
            zoom: 3.1,
        }
    }
}

/// Camera command handed to the map provider after a successful query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraAnimation {
    pub min_long: f64,
    pub min_lat: f64,
    pub max_long: f64,
    pub max_lat: f64,
    pub padding: u32,
    pub duration_ms: u64,
}

impl ViewState {
    /// Recenter on the box and pick a zoom that keeps the wider of the two
    /// spans in frame. Returns the animation command for the map provider.
    pub fn fit_bounds(&mut self, bounds: &BoundingBox) -> CameraAnimation {
        let (longitude, latitude) = bounds.center();
        self.longitude = longitude;
        self.latitude = latitude;

        let span = bounds
            .long_span()
            .max(bounds.lat_span())
            .max(f64::EPSILON);
        self.zoom = (360.0 / span).log2().clamp(MIN_ZOOM, MAX_ZOOM);

        CameraAnimation {
            min_long: bounds.min_long,
            min_lat: bounds.min_lat,
            max_long: bounds.max_long,
            max_lat: bounds.max_lat,
            padding: FIT_PADDING,
            duration_ms: FIT_DURATION_MS,
        }
    }
}
