//! Axum route handlers for the single-user Profile API.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::profile::UserProfile;
use crate::state::AppState;
use crate::store::profile::{NewProfile, ProfilePatch};

/// GET /api/v1/profile
/// Returns the profile, or an empty object when none has been created yet.
pub async fn get_profile(State(state): State<AppState>) -> Json<Value> {
    match state.profile.get().await {
        Some(profile) => Json(serde_json::to_value(profile).unwrap_or(Value::Null)),
        None => Json(json!({})),
    }
}

/// POST /api/v1/profile
pub async fn create_profile(
    State(state): State<AppState>,
    Json(new): Json<NewProfile>,
) -> Result<Json<UserProfile>, AppError> {
    let profile = state.profile.create(new).await?;
    tracing::info!("Created profile {}", profile.id);
    Ok(Json(profile))
}

/// PUT /api/v1/profile
pub async fn update_profile(
    State(state): State<AppState>,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<UserProfile>, AppError> {
    let profile = state
        .profile
        .update(patch)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;
    Ok(Json(profile))
}

/// DELETE /api/v1/profile
pub async fn delete_profile(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    if !state.profile.delete().await? {
        return Err(AppError::NotFound("Profile not found".to_string()));
    }
    Ok(Json(json!({ "deleted": true })))
}
