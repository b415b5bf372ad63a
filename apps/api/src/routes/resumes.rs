//! Axum route handlers for the Resume API, including the rendered preview.

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::render::preview::preview;
use crate::state::AppState;
use crate::store::resumes::{NewResume, ResumePatch};

/// GET /api/v1/resumes
pub async fn list_resumes(State(state): State<AppState>) -> Json<Vec<Resume>> {
    Json(state.resumes.list().await)
}

/// POST /api/v1/resumes
pub async fn create_resume(
    State(state): State<AppState>,
    Json(new): Json<NewResume>,
) -> Result<Json<Resume>, AppError> {
    let resume = state.resumes.create(new).await?;
    tracing::info!("Created resume {}", resume.id);
    Ok(Json(resume))
}

/// GET /api/v1/resumes/:id
pub async fn get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Resume>, AppError> {
    let resume = state
        .resumes
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(resume))
}

/// PUT /api/v1/resumes/:id
pub async fn update_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ResumePatch>,
) -> Result<Json<Resume>, AppError> {
    let resume = state
        .resumes
        .update(id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(resume))
}

/// DELETE /api/v1/resumes/:id
pub async fn delete_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    if !state.resumes.delete(id).await? {
        return Err(AppError::NotFound(format!("Resume {id} not found")));
    }
    Ok(Json(json!({ "deleted": id })))
}

#[derive(Deserialize)]
pub struct PreviewQuery {
    /// Measured container width in pixels. Omitted while the client has no
    /// measurement yet — the preview then renders hidden.
    pub width: Option<f64>,
}

/// GET /api/v1/resumes/:id/preview?width=
/// The composition engine's HTTP face: returns the scaled preview as HTML.
pub async fn preview_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<PreviewQuery>,
) -> Result<Html<String>, AppError> {
    if let Some(width) = query.width {
        if !width.is_finite() || width <= 0.0 {
            return Err(AppError::Validation(
                "width must be a positive number".to_string(),
            ));
        }
    }
    let resume = state
        .resumes
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Html(preview(Some(&resume), query.width).to_html()))
}
