//! LLM completion layer.
//!
//! A unified `LLMProvider` trait with an OpenAI chat-completions
//! implementation. The service treats the remote endpoint as an opaque
//! text-completion function: no streaming, no retries, no tool calling.

pub mod provider;
pub mod providers;

pub use provider::{
    CompletionRequest, CompletionResponse, FinishReason, LLMError, LLMProvider, Message,
    MessageRole, Usage,
};
pub use providers::OpenAIProvider;
