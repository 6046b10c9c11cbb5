//! Fixed section API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::SetFieldRequestDto;
use crate::application::services::WorldService;
use crate::domain::entities::{SectionKind, SectionValues};
use crate::domain::errors::WorldModelError;
use crate::infrastructure::state::AppState;

fn map_error(e: WorldModelError) -> (StatusCode, String) {
    let status = match e {
        WorldModelError::UnknownSection(_) => StatusCode::NOT_FOUND,
        WorldModelError::UnknownField { .. } => StatusCode::BAD_REQUEST,
        WorldModelError::PercentageOutOfRange(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, e.to_string())
}

/// Get one section as a `field -> value` object
pub async fn get_section(
    State(state): State<Arc<AppState>>,
    Path(section): Path<String>,
) -> Result<Json<SectionValues>, (StatusCode, String)> {
    let kind: SectionKind = section.parse().map_err(map_error)?;
    Ok(Json(state.world_service.get_section(kind).await))
}

/// Set one field of one section
pub async fn set_section_field(
    State(state): State<Arc<AppState>>,
    Path((section, field)): Path<(String, String)>,
    Json(req): Json<SetFieldRequestDto>,
) -> Result<Json<SectionValues>, (StatusCode, String)> {
    let values = state
        .world_service
        .set_section_field(&section, &field, req.value)
        .await
        .map_err(map_error)?;
    Ok(Json(values))
}
