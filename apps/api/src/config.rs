use anyhow::{Context, Result};

use crate::analysis::chunker::ChunkerConfig;
use crate::analysis::skills::default_vocabulary;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub groq_model: String,
    pub llm_temperature: f32,
    pub cohere_api_key: String,
    pub cohere_embed_model: String,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub max_resume_chars: usize,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

/// Immutable settings handed to the analysis components at construction.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub chunker: ChunkerConfig,
    /// Controlled vocabulary for keyword matching, lowercase, in match order.
    pub vocabulary: Vec<String>,
    /// Resumes longer than this (in characters) are flagged as too long.
    pub max_resume_chars: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            chunker: ChunkerConfig::default(),
            vocabulary: default_vocabulary(),
            max_resume_chars: 10_000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            groq_model: optional_env("GROQ_MODEL", crate::llm_client::DEFAULT_MODEL),
            llm_temperature: parse_env("LLM_TEMPERATURE", 0.1)?,
            cohere_api_key: require_env("COHERE_API_KEY")?,
            cohere_embed_model: optional_env(
                "COHERE_EMBED_MODEL",
                crate::embedding::cohere::DEFAULT_MODEL,
            ),
            chunk_size: parse_env("CHUNK_SIZE", 1000)?,
            chunk_overlap: parse_env("CHUNK_OVERLAP", 200)?,
            max_resume_chars: parse_env("MAX_RESUME_CHARS", 10_000)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            port: parse_env("PORT", 8000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Builds the analysis settings, validating the chunking parameters.
    pub fn analysis(&self) -> Result<AnalysisConfig> {
        let chunker = ChunkerConfig::new(self.chunk_size, self.chunk_overlap)
            .context("Invalid CHUNK_SIZE / CHUNK_OVERLAP")?;

        Ok(AnalysisConfig {
            chunker,
            vocabulary: default_vocabulary(),
            max_resume_chars: self.max_resume_chars,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}
