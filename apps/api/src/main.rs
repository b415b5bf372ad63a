mod config;
mod errors;
mod llm_client;
mod models;
mod render;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{OpenAiClient, TextGenerator};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::hints::HintStore;
use crate::store::profile::ProfileStore;
use crate::store::resumes::ResumeStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CraftCV API v{}", env!("CARGO_PKG_VERSION"));

    // Flat-file stores share the configured data directory.
    let resumes = ResumeStore::new(&config.data_dir);
    let hints = HintStore::new(&config.data_dir);
    let profile = ProfileStore::new(&config.data_dir);
    info!("Store directory: {}", config.data_dir.display());

    // Text-generation collaborator — optional; without a key the generation
    // endpoints answer 503 and everything else works normally.
    let generator: Option<Arc<dyn TextGenerator>> = match &config.openai_api_key {
        Some(key) => {
            info!("Generation client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(OpenAiClient::new(key.clone())))
        }
        None => {
            info!("No OPENAI_API_KEY set — generation endpoints disabled");
            None
        }
    };

    let state = AppState {
        resumes,
        hints,
        profile,
        generator,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
