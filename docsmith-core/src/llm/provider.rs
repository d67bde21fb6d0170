//! Completion provider abstraction.
//!
//! The service sends a two-message exchange (system persona plus the
//! composed prompt) and reads back plain text. Providers own their wire
//! format; callers only see `CompletionRequest` / `CompletionResponse`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::constants::message_roles;

/// Chat message in a completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    /// Create a system message
    pub fn system(content: String) -> Self {
        Self {
            role: MessageRole::System,
            content,
        }
    }

    /// Create a user message
    pub fn user(content: String) -> Self {
        Self {
            role: MessageRole::User,
            content,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    /// Role string for the OpenAI chat-completions wire format
    pub fn as_openai_str(&self) -> &'static str {
        match self {
            MessageRole::System => message_roles::SYSTEM,
            MessageRole::User => message_roles::USER,
            MessageRole::Assistant => message_roles::ASSISTANT,
        }
    }
}

/// Request to the completion service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
    pub model: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// Response from the completion service
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub content: Option<String>,
    pub usage: Option<Usage>,
    pub finish_reason: FinishReason,
}

#[derive(Debug, Clone)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Clone)]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    Error(String),
}

#[derive(Debug, Error)]
pub enum LLMError {
    #[error("Authentication failed: {0}")]
    Authentication(String),
    #[error("Rate limit exceeded")]
    RateLimit,
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Provider error: {0}")]
    Provider(String),
}

/// Completion provider trait
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Provider name (e.g., "openai")
    fn name(&self) -> &str;

    /// Generate a completion
    async fn generate(&self, request: CompletionRequest) -> Result<CompletionResponse, LLMError>;

    /// Validate request shape for this provider
    fn validate_request(&self, request: &CompletionRequest) -> Result<(), LLMError> {
        if request.messages.is_empty() {
            return Err(LLMError::InvalidRequest(
                "Messages cannot be empty".to_string(),
            ));
        }

        if request.model.is_empty() {
            return Err(LLMError::InvalidRequest(
                "Model cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullProvider;

    #[async_trait]
    impl LLMProvider for NullProvider {
        fn name(&self) -> &str {
            "null"
        }

        async fn generate(
            &self,
            _request: CompletionRequest,
        ) -> Result<CompletionResponse, LLMError> {
            Ok(CompletionResponse {
                content: None,
                usage: None,
                finish_reason: FinishReason::Stop,
            })
        }
    }

    #[test]
    fn test_validate_request_rejects_empty_messages() {
        let request = CompletionRequest {
            messages: vec![],
            model: "gpt-4-0125-preview".to_string(),
            max_tokens: None,
            temperature: None,
        };
        assert!(NullProvider.validate_request(&request).is_err());
    }

    #[test]
    fn test_validate_request_rejects_empty_model() {
        let request = CompletionRequest {
            messages: vec![Message::user("hello".to_string())],
            model: String::new(),
            max_tokens: None,
            temperature: None,
        };
        assert!(NullProvider.validate_request(&request).is_err());
    }

    #[tokio::test]
    async fn test_default_generate_contract() {
        let request = CompletionRequest {
            messages: vec![Message::user("hello".to_string())],
            model: "gpt-4-0125-preview".to_string(),
            max_tokens: None,
            temperature: None,
        };
        let response = NullProvider.generate(request).await.unwrap();
        assert!(response.content.is_none());
        assert!(matches!(response.finish_reason, FinishReason::Stop));
    }

    #[test]
    fn test_message_roles_serialize_lowercase() {
        assert_eq!(MessageRole::System.as_openai_str(), "system");
        assert_eq!(
            serde_json::to_value(MessageRole::Assistant).unwrap(),
            serde_json::json!("assistant")
        );
    }
}
