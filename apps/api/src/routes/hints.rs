//! Axum route handlers for the Hint API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::hint::{Hint, ResumePart};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintQuery {
    pub resume_id: Uuid,
    #[serde(default)]
    pub part: Option<ResumePart>,
}

/// GET /api/v1/hints?resumeId=&part=
pub async fn list_hints(
    State(state): State<AppState>,
    Query(query): Query<HintQuery>,
) -> Json<Vec<Hint>> {
    Json(state.hints.list_by_resume(query.resume_id, query.part).await)
}

/// DELETE /api/v1/hints/:id
pub async fn delete_hint(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    if !state.hints.delete(id).await? {
        return Err(AppError::NotFound(format!("Hint {id} not found")));
    }
    Ok(Json(json!({ "deleted": id })))
}
