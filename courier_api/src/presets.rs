use axum::Json;
use courier_core::{domain::coordinate::Coordinate, planner::presets::PRESETS};
use serde::Serialize;

#[derive(Serialize)]
pub struct PresetResponse {
    name: &'static str,
    coordinate: Coordinate,
}

pub async fn presets_handler() -> Json<Vec<PresetResponse>> {
    Json(
        PRESETS
            .iter()
            .map(|preset| PresetResponse {
                name: preset.name,
                coordinate: preset.coordinate,
            })
            .collect(),
    )
}
