//! Whole-notebook API routes

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::dto::{notebook_schema, SectionSchemaDto};
use crate::application::services::WorldService;
use crate::domain::services::Summary;
use crate::infrastructure::export::WorldSnapshot;
use crate::infrastructure::state::AppState;

/// Export the whole notebook
pub async fn get_world(State(state): State<Arc<AppState>>) -> Json<WorldSnapshot> {
    let model = state.world_service.export_model().await;
    Json(WorldSnapshot::capture(&model))
}

/// Section titles, field keys and hints
pub async fn get_schema() -> Json<Vec<SectionSchemaDto>> {
    Json(notebook_schema())
}

pub async fn get_summary(State(state): State<Arc<AppState>>) -> Json<Summary> {
    Json(state.world_service.summary().await)
}
