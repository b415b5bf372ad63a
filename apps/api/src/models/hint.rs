//! Stored improvement hints produced by the evaluate endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a hint praises an existing strength or suggests an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintKind {
    Success,
    Notice,
}

/// The five resume sections a hint can target. Closed set — the evaluate
/// prompt instructs the model to pick one of exactly these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResumePart {
    #[serde(rename = "generalInfo")]
    GeneralInfo,
    #[serde(rename = "experience")]
    Experience,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "skills")]
    Skills,
    #[serde(rename = "summary")]
    Summary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub id: Uuid,
    pub resume_id: Uuid,
    #[serde(rename = "type")]
    pub kind: HintKind,
    pub content: String,
    pub part: ResumePart,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
