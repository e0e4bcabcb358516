use super::GeoPoint;

/// Wrap each point's identifier in the bracket notation the vector-tile
/// source uses for its `Name` property, e.g. `<at><openparen>94105<closeparen>`.
/// The output is used verbatim as literal match values in the fill layer's
/// filter expression.
pub fn tile_filter_labels(points: &[GeoPoint]) -> Vec<String> {
    points
        .iter()
        .map(|p| format!("<at><openparen>{}<closeparen>", p.name))
        .collect()
}
