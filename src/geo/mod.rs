mod bbox;
mod features;
mod formatter;

pub use bbox::BoundingBox;
pub use features::{city_circle_layer, fill_layer, point_features, zip_circle_layer};
pub use formatter::tile_filter_labels;

use serde::{Deserialize, Serialize};

/// A single named location used for map plotting. Derived from a query
/// response and recomputed wholesale on every new result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub name: String,
    pub lat: f64,
    pub long: f64,
}

impl GeoPoint {
    pub fn new(name: impl Into<String>, lat: f64, long: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            long,
        }
    }
}
