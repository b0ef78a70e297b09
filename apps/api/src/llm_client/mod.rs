/// LLM Client: the single point of entry for all generative-model calls.
///
/// ARCHITECTURAL RULE: No other module may call the Groq API directly.
/// Analysis components depend on the `CompletionModel` trait, never on `LlmClient`.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// Model used when `GROQ_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "deepseek-r1-distill-llama-70b";
const MAX_TOKENS: u32 = 4096;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// The generative capability: free-form text in, free-form text out.
///
/// The response may wrap JSON in prose, code fences or reasoning tags;
/// callers are responsible for extracting structure from it.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the text content of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Groq chat-completions client (OpenAI-compatible wire format).
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    model: String,
    temperature: f32,
}

impl LlmClient {
    pub fn new(api_key: String, model: String, temperature: f32) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key,
            model,
            temperature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes a single call to the chat-completions endpoint, returning the full response.
    pub async fn call(&self, system: &str, prompt: &str) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            max_tokens: MAX_TOKENS,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }
}

#[async_trait]
impl CompletionModel for LlmClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(system, prompt).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_response_text_reads_first_choice() {
        let json = r#"{
            "choices": [{"message": {"role": "assistant", "content": "[{\"category\": \"Keywords\"}]"}}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 7, "total_tokens": 19}
        }"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), Some("[{\"category\": \"Keywords\"}]"));
        assert_eq!(response.usage.unwrap().completion_tokens, 7);
    }

    #[test]
    fn test_chat_response_blank_content_is_none() {
        let json = r#"{"choices": [{"message": {"content": "   "}}]}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_chat_response_without_choices_is_none() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_chat_request_serializes_system_then_user() {
        let request = ChatRequest {
            model: DEFAULT_MODEL,
            temperature: 0.1,
            max_tokens: MAX_TOKENS,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "hi",
                },
            ],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], DEFAULT_MODEL);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "hi");
    }
}
