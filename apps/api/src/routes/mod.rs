pub mod generate;
pub mod health;
pub mod hints;
pub mod profile;
pub mod resumes;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route(
            "/api/v1/resumes",
            get(resumes::list_resumes).post(resumes::create_resume),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resumes::get_resume)
                .put(resumes::update_resume)
                .delete(resumes::delete_resume),
        )
        .route("/api/v1/resumes/:id/preview", get(resumes::preview_resume))
        // Hint API
        .route("/api/v1/hints", get(hints::list_hints))
        .route("/api/v1/hints/:id", delete(hints::delete_hint))
        // Profile API
        .route(
            "/api/v1/profile",
            get(profile::get_profile)
                .post(profile::create_profile)
                .put(profile::update_profile)
                .delete(profile::delete_profile),
        )
        // Generation API
        .route("/api/v1/generate/summary", post(generate::generate_summary))
        .route(
            "/api/v1/generate/evaluate",
            post(generate::evaluate_resume),
        )
        .route(
            "/api/v1/generate/experience",
            post(generate::generate_experience),
        )
        .with_state(state)
}
