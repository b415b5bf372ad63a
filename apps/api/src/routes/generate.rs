//! Axum route handlers for the Generation API — summary writing, resume
//! evaluation (persisted as hints), and work-experience autofill.
//!
//! The text-generation collaborator is opaque and may return malformed JSON;
//! every handler validates the shape before using it.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{prompts, LlmError, TextGenerator};
use crate::models::hint::{Hint, HintKind, ResumePart};
use crate::state::AppState;
use crate::store::hints::NewHint;

fn generator(state: &AppState) -> Result<&Arc<dyn TextGenerator>, AppError> {
    state.generator.as_ref().ok_or(AppError::GenerationDisabled)
}

// ────────────────────────────────────────────────────────────────────────────
// Summary generation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub resume_data: Value,
}

/// POST /api/v1/generate/summary
pub async fn generate_summary(
    State(state): State<AppState>,
    Json(req): Json<SummaryRequest>,
) -> Result<Json<Value>, AppError> {
    if req.resume_data.is_null() {
        return Err(AppError::Validation(
            "resumeData is required".to_string(),
        ));
    }
    let generator = generator(&state)?;

    let resume_json = serde_json::to_string(&req.resume_data)
        .map_err(|e| AppError::Internal(e.into()))?;
    let (system, prompt) = prompts::summary_prompt(&resume_json);
    let response = generator.generate_json(&system, &prompt).await?;

    let summary = response
        .get("summary")
        .and_then(Value::as_str)
        .ok_or(AppError::Llm(LlmError::MissingField("summary")))?;
    Ok(Json(json!({ "summary": summary })))
}

// ────────────────────────────────────────────────────────────────────────────
// Evaluation → hints
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    pub resume_id: Uuid,
    pub job_description: String,
}

/// The hint shape the evaluate prompt pins down; anything else is rejected.
#[derive(Deserialize)]
struct GeneratedHints {
    hints: Vec<GeneratedHint>,
}

#[derive(Deserialize)]
struct GeneratedHint {
    #[serde(rename = "type")]
    kind: HintKind,
    part: ResumePart,
    content: String,
}

/// POST /api/v1/generate/evaluate
/// Evaluates the stored resume against a job description and persists the
/// returned hints.
pub async fn evaluate_resume(
    State(state): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<Vec<Hint>>, AppError> {
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription is required".to_string(),
        ));
    }
    let generator = generator(&state)?;

    let resume = state
        .resumes
        .get(req.resume_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Resume {} not found", req.resume_id)))?;
    let resume_json =
        serde_json::to_string_pretty(&resume).map_err(|e| AppError::Internal(e.into()))?;

    let (system, prompt) = prompts::evaluate_prompt(&resume_json, &req.job_description);
    let response = generator.generate_json(&system, &prompt).await?;

    let generated: GeneratedHints = serde_json::from_value(response)
        .map_err(|_| AppError::Llm(LlmError::MissingField("hints")))?;

    let new_hints = generated
        .hints
        .into_iter()
        .map(|h| NewHint {
            resume_id: req.resume_id,
            kind: h.kind,
            content: h.content,
            part: h.part,
        })
        .collect();
    let hints = state.hints.create_many(new_hints).await?;
    tracing::info!(
        "Stored {} hints for resume {}",
        hints.len(),
        req.resume_id
    );
    Ok(Json(hints))
}

// ────────────────────────────────────────────────────────────────────────────
// Experience autofill
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ExperienceRequest {
    pub description: String,
}

/// POST /api/v1/generate/experience
/// Extracts a structured work-experience entry from free text.
pub async fn generate_experience(
    State(state): State<AppState>,
    Json(req): Json<ExperienceRequest>,
) -> Result<Json<Value>, AppError> {
    if req.description.trim().is_empty() {
        return Err(AppError::Validation(
            "description is required".to_string(),
        ));
    }
    let generator = generator(&state)?;

    let (system, prompt) = prompts::experience_prompt(&req.description);
    let response = generator.generate_json(&system, &prompt).await?;
    if !response.is_object() {
        return Err(AppError::Llm(LlmError::MissingField("position")));
    }
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_hints_parse_the_pinned_shape() {
        let raw = json!({
            "hints": [
                { "type": "success", "part": "skills", "content": "Strong match" },
                { "type": "notice", "part": "generalInfo", "content": "Add a phone number" }
            ]
        });
        let parsed: GeneratedHints = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.hints.len(), 2);
        assert_eq!(parsed.hints[0].kind, HintKind::Success);
        assert_eq!(parsed.hints[1].part, ResumePart::GeneralInfo);
    }

    #[test]
    fn test_generated_hints_reject_unknown_part() {
        let raw = json!({
            "hints": [{ "type": "notice", "part": "hobbies", "content": "x" }]
        });
        assert!(serde_json::from_value::<GeneratedHints>(raw).is_err());
    }
}
