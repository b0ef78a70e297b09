mod analysis;
mod config;
mod embedding;
mod errors;
mod extract;
mod llm_client;
mod models;
mod routes;
mod state;
#[cfg(test)]
mod testing;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::pipeline::Analyzer;
use crate::config::Config;
use crate::embedding::cohere::CohereEmbeddingProvider;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing API keys)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    // Generative capability
    let llm = LlmClient::new(
        config.groq_api_key.clone(),
        config.groq_model.clone(),
        config.llm_temperature,
    )?;
    info!("LLM client initialized (model: {})", llm.model());

    // Embedding capability
    let embedder = CohereEmbeddingProvider::new(
        config.cohere_api_key.clone(),
        config.cohere_embed_model.clone(),
    )?;
    info!("Embedding provider initialized (model: {})", embedder.model());

    let analysis_config = config.analysis()?;
    info!(
        chunk_size = analysis_config.chunker.chunk_size(),
        chunk_overlap = analysis_config.chunker.chunk_overlap(),
        vocabulary = analysis_config.vocabulary.len(),
        "Analysis configured"
    );
    let analyzer = Analyzer::new(&analysis_config, Arc::new(embedder), Arc::new(llm));

    let state = AppState {
        analyzer: Arc::new(analyzer),
        max_upload_bytes: config.max_upload_bytes,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict allowed origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
