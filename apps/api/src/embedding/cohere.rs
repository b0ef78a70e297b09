//! Cohere embedding provider using the `/v1/embed` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::embedding::{EmbeddingError, EmbeddingProvider};

const COHERE_EMBED_URL: &str = "https://api.cohere.ai/v1/embed";
/// Model used when `COHERE_EMBED_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "embed-english-v3.0";
/// Texts per request; the API caps a call at 96.
const BATCH_SIZE: usize = 48;
const REQUEST_TIMEOUT_SECS: u64 = 60;

pub struct CohereEmbeddingProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl CohereEmbeddingProvider {
    pub fn new(api_key: String, model: String) -> Result<Self, EmbeddingError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key,
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn embed_one_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let request_body = EmbedRequest {
            model: &self.model,
            texts,
            input_type: "search_document",
            truncate: "END",
        };

        let response = self
            .client
            .post(COHERE_EMBED_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = "Cohere", error = %e, "request failed");
                EmbeddingError::Http(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            error!(provider = "Cohere", %status, "API error");
            return Err(EmbeddingError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: EmbedResponse = response.json().await?;
        if parsed.embeddings.len() != texts.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: texts.len(),
                actual: parsed.embeddings.len(),
            });
        }

        Ok(parsed.embeddings)
    }
}

// ── Cohere API request/response types ──────────────────────────────

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    texts: &'a [&'a str],
    input_type: &'a str,
    truncate: &'a str,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}

#[async_trait]
impl EmbeddingProvider for CohereEmbeddingProvider {
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!(
            provider = "Cohere",
            batch_size = texts.len(),
            model = %self.model,
            "embedding batch"
        );

        let mut embeddings = Vec::with_capacity(texts.len());
        for batch in texts.chunks(BATCH_SIZE) {
            embeddings.extend(self.embed_one_batch(batch).await?);
        }
        Ok(embeddings)
    }
}
