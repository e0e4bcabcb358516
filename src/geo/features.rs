use super::GeoPoint;
use serde_json::{json, Value};

/// GeoJSON `FeatureCollection` of `Point` geometries, coordinates ordered
/// `[long, lat]` as GeoJSON requires.
pub fn point_features(points: &[GeoPoint]) -> Value {
    let features: Vec<Value> = points
        .iter()
        .map(|p| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [p.long, p.lat]
                }
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features
    })
}

/// Polygon overlay over the vector-tile zip-code source, restricted to the
/// formatted labels of the queried locations. Only visible zoomed in past
/// the circle layer's range.
pub fn fill_layer(labels: &[String]) -> Value {
    json!({
        "id": "zips-kml",
        "type": "fill",
        "source": "zips-kml",
        "minzoom": 5,
        "layout": { "visibility": "visible" },
        "paint": {
            "fill-outline-color": "black",
            "fill-opacity": 0.9,
            "fill-color": "#006AF9"
        },
        "source-layer": "Layer_0",
        "filter": ["in", ["get", "Name"], ["literal", labels]]
    })
}

/// Circle overlay marking queried zip codes while zoomed out.
pub fn zip_circle_layer() -> Value {
    json!({
        "id": "zip",
        "type": "circle",
        "maxzoom": 8,
        "layout": { "visibility": "visible" },
        "paint": {
            "circle-radius": 10,
            "circle-color": "#006AF9",
            "circle-opacity": 1
        }
    })
}

/// Circle overlay marking queried cities.
pub fn city_circle_layer() -> Value {
    json!({
        "id": "cities",
        "type": "circle",
        "layout": { "visibility": "visible" },
        "paint": {
            "circle-radius": 10,
            "circle-color": "#006AF9",
            "circle-opacity": 0.8
        }
    })
}
