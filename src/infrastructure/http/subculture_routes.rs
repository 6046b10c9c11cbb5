//! Subculture API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{SubcultureResponseDto, UpdateRecordRequestDto};
use crate::application::services::WorldService;
use crate::domain::value_objects::SubcultureId;
use crate::infrastructure::state::AppState;

fn parse_id(id: &str) -> Result<SubcultureId, (StatusCode, String)> {
    id.parse::<u64>()
        .map(SubcultureId::from_raw)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid subculture ID".to_string()))
}

pub async fn list_subcultures(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<SubcultureResponseDto>> {
    let subcultures = state.world_service.list_subcultures().await;
    Json(subcultures.into_iter().map(SubcultureResponseDto::from).collect())
}

pub async fn generate_subculture(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<SubcultureResponseDto>) {
    let subculture = state.world_service.generate_subculture().await;
    (StatusCode::CREATED, Json(SubcultureResponseDto::from(subculture)))
}

pub async fn get_subculture(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SubcultureResponseDto>, (StatusCode, String)> {
    let subculture = state
        .world_service
        .get_subculture(parse_id(&id)?)
        .await
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Subculture not found".to_string()))?;

    Ok(Json(SubcultureResponseDto::from(subculture)))
}

pub async fn update_subculture(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateRecordRequestDto>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .world_service
        .update_subculture(parse_id(&id)?, &req.field, req.value)
        .await;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_subculture(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    state.world_service.remove_subculture(parse_id(&id)?).await;

    Ok(StatusCode::NO_CONTENT)
}
