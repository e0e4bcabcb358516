use crate::geo::{city_circle_layer, fill_layer, point_features, zip_circle_layer, GeoPoint};
use crate::view::{CameraAnimation, ViewState};
use serde_json::{json, Value};

/// Lifecycle of one query-response cycle:
/// Idle -> Sanitizing -> AwaitingResponse -> {Success, Failure} -> Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryPhase {
    #[default]
    Idle,
    Sanitizing,
    AwaitingResponse,
    Success,
    Failure,
}

/// Everything the presentation layer renders. Rebuilt per response; a
/// failed query leaves the previous table and map content visible.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub phase: QueryPhase,
    pub sql_query: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub zip_points: Vec<GeoPoint>,
    pub city_points: Vec<GeoPoint>,
    pub tile_labels: Vec<String>,
    pub error_message: Option<String>,
    pub view: ViewState,
    pub last_animation: Option<CameraAnimation>,
}

impl SessionState {
    /// True until the first query produced SQL; the presentation layer
    /// shows example suggestions instead of the debug panel while set.
    pub fn shows_examples(&self) -> bool {
        self.sql_query.is_empty()
    }

    /// Full map-provider document: the two point overlays, the filtered
    /// vector-tile fill layer, the camera, and the pending animation.
    pub fn map_document(&self) -> Value {
        json!({
            "view": self.view,
            "animation": self.last_animation,
            "sources": {
                "zip-zoomed-out": point_features(&self.zip_points),
                "cities": point_features(&self.city_points),
            },
            "layers": [
                fill_layer(&self.tile_labels),
                zip_circle_layer(),
                city_circle_layer(),
            ]
        })
    }
}
