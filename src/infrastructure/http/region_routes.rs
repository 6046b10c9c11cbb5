//! Region API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{RegionResponseDto, UpdateRecordRequestDto};
use crate::application::services::WorldService;
use crate::domain::value_objects::RegionId;
use crate::infrastructure::state::AppState;

fn parse_id(id: &str) -> Result<RegionId, (StatusCode, String)> {
    id.parse::<u64>()
        .map(RegionId::from_raw)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid region ID".to_string()))
}

/// List regions in insertion order
pub async fn list_regions(State(state): State<Arc<AppState>>) -> Json<Vec<RegionResponseDto>> {
    let regions = state.world_service.list_regions().await;
    Json(regions.into_iter().map(RegionResponseDto::from).collect())
}

/// Generate a new random region
pub async fn generate_region(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<RegionResponseDto>) {
    let region = state.world_service.generate_region().await;
    (StatusCode::CREATED, Json(RegionResponseDto::from(region)))
}

/// Get a region by ID
pub async fn get_region(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<RegionResponseDto>, (StatusCode, String)> {
    let region = state
        .world_service
        .get_region(parse_id(&id)?)
        .await
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Region not found".to_string()))?;

    Ok(Json(RegionResponseDto::from(region)))
}

/// Edit a region's name or notes
///
/// Unknown ids and fields other than `name`/`notes` are accepted and ignored.
pub async fn update_region(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateRecordRequestDto>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .world_service
        .update_region(parse_id(&id)?, &req.field, req.value)
        .await;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a region; deleting a missing region is not an error
pub async fn delete_region(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    state.world_service.remove_region(parse_id(&id)?).await;

    Ok(StatusCode::NO_CONTENT)
}
