//! Test doubles for the embedding and generative capabilities.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::analysis::skills::default_vocabulary;
use crate::embedding::{EmbeddingError, EmbeddingProvider};
use crate::llm_client::{CompletionModel, LlmError};

/// A completion model that replays canned replies and records every prompt.
pub struct ScriptedModel {
    replies: Mutex<Vec<Option<String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    /// Replies are consumed in order; once exhausted, the last one repeats.
    /// `None` means the call fails.
    pub fn new(replies: Vec<Option<&str>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(|r| r.map(str::to_string)).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(reply: &str) -> Self {
        Self::new(vec![Some(reply)])
    }

    pub fn failing() -> Self {
        Self::new(vec![None])
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionModel for ScriptedModel {
    async fn complete(&self, _system: &str, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let mut replies = self.replies.lock().unwrap();
        let reply = if replies.len() > 1 {
            replies.remove(0)
        } else {
            replies.first().cloned().flatten()
        };

        reply.ok_or(LlmError::Api {
            status: 503,
            message: "scripted failure".to_string(),
        })
    }
}

/// Routes each prompt to a reply by substring, so concurrent calls stay deterministic.
pub struct RoutedModel {
    routes: Vec<(&'static str, &'static str)>,
}

impl RoutedModel {
    pub fn new(routes: Vec<(&'static str, &'static str)>) -> Self {
        Self { routes }
    }
}

#[async_trait]
impl CompletionModel for RoutedModel {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        self.routes
            .iter()
            .find(|(needle, _)| system.contains(needle) || prompt.contains(needle))
            .map(|(_, reply)| reply.to_string())
            .ok_or(LlmError::EmptyContent)
    }
}

/// Bag-of-terms embedder: one dimension per vocabulary term, valued by its
/// occurrence count. Texts sharing no terms embed to orthogonal (or zero) vectors.
pub struct KeywordEmbedder {
    terms: Vec<String>,
}

impl Default for KeywordEmbedder {
    fn default() -> Self {
        Self {
            terms: default_vocabulary(),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for KeywordEmbedder {
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(texts
            .iter()
            .map(|text| {
                let lower = text.to_lowercase();
                self.terms
                    .iter()
                    .map(|term| lower.matches(term.as_str()).count() as f32)
                    .collect()
            })
            .collect())
    }
}

pub struct FailingEmbedder;

#[async_trait]
impl EmbeddingProvider for FailingEmbedder {
    async fn embed_batch(&self, _texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Err(EmbeddingError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        })
    }
}
