//! Embedding capability: turns text chunks into fixed-dimension vectors.
//!
//! The similarity engine depends only on [`EmbeddingProvider`]; the Cohere
//! adapter in [`cohere`] is the production backend.

use async_trait::async_trait;
use thiserror::Error;

pub mod cohere;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("expected {expected} embeddings, provider returned {actual}")]
    CountMismatch { expected: usize, actual: usize },

    #[error("embedding dimensions don't match: {0} vs {1}")]
    DimensionMismatch(usize, usize),
}

/// A provider that generates vector embeddings for a batch of texts.
///
/// Implementations must return exactly one vector per input, in input order,
/// and every vector of one call must share the same dimension.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError>;
}
