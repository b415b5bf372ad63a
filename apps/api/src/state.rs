use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::store::hints::HintStore;
use crate::store::profile::ProfileStore;
use crate::store::resumes::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub resumes: ResumeStore,
    pub hints: HintStore,
    pub profile: ProfileStore,
    /// Text-generation collaborator. `None` when no API key is configured;
    /// generation handlers answer 503 in that case.
    pub generator: Option<Arc<dyn TextGenerator>>,
    pub config: Config,
}
