use crate::api::QueryResult;
use crate::geo::GeoPoint;
use serde_json::Value;

/// Columns carrying raw coordinates. Stripped from the displayed table;
/// consumed only by geo extraction.
const GEO_COLUMNS: [&str; 2] = ["lat", "long"];

/// Which designated column names a row's location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoColumn {
    ZipCode,
    City,
}

impl GeoColumn {
    pub fn key(self) -> &'static str {
        match self {
            GeoColumn::ZipCode => "zip_code",
            GeoColumn::City => "city",
        }
    }
}

/// Row-oriented reshaping of one column-oriented `QueryResult`.
#[derive(Debug, Clone, Default)]
pub struct Transformed {
    /// `column_names` with the raw coordinate columns removed.
    pub columns: Vec<String>,
    /// One entry per result row, cells positionally aligned to `columns`.
    pub rows: Vec<Vec<String>>,
    pub zip_points: Vec<GeoPoint>,
    pub city_points: Vec<GeoPoint>,
}

impl Transformed {
    /// Points used to frame the map. Zip codes take precedence; cities
    /// only drive the camera when no zip codes were returned.
    pub fn frame_points(&self) -> &[GeoPoint] {
        if self.zip_points.is_empty() {
            &self.city_points
        } else {
            &self.zip_points
        }
    }
}

pub fn transform(result: &QueryResult) -> Transformed {
    let columns = filtered_columns(result);
    let rows = table_rows(result, &columns);

    let mut zip_points = extract_geo_points(result, GeoColumn::ZipCode);
    pad_for_bounds(&mut zip_points);
    let mut city_points = extract_geo_points(result, GeoColumn::City);
    pad_for_bounds(&mut city_points);

    Transformed {
        columns,
        rows,
        zip_points,
        city_points,
    }
}

/// Column list for display: everything except raw coordinates, original
/// order preserved.
pub fn filtered_columns(result: &QueryResult) -> Vec<String> {
    result
        .column_names
        .iter()
        .filter(|c| !GEO_COLUMNS.contains(&c.as_str()))
        .cloned()
        .collect()
}

/// Pivot row objects into positional cells, looked up by filtered column
/// name. A key absent from a row renders as an empty cell.
pub fn table_rows(result: &QueryResult, columns: &[String]) -> Vec<Vec<String>> {
    result
        .results
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|c| row.get(c).map(cell_text).unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Pull named locations out of the rows. A result without the designated
/// column yields an empty list, not an error; rows missing a usable
/// coordinate pair are skipped.
pub fn extract_geo_points(result: &QueryResult, key: GeoColumn) -> Vec<GeoPoint> {
    if !result.has_column(key.key()) {
        return Vec::new();
    }

    result
        .results
        .iter()
        .filter_map(|row| {
            let name = row.get(key.key()).map(cell_text)?;
            let lat = row.get("lat").and_then(Value::as_f64)?;
            let long = row.get("long").and_then(Value::as_f64)?;
            Some(GeoPoint::new(name, lat, long))
        })
        .collect()
}

/// Framing the map needs at least two coordinates to form a line; a lone
/// point gets a synthetic twin offset by +0.1 latitude.
fn pad_for_bounds(points: &mut Vec<GeoPoint>) {
    if points.len() == 1 {
        let first = &points[0];
        let twin = GeoPoint::new(first.name.clone(), first.lat + 0.1, first.long);
        points.push(twin);
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
