//! # docsmith-core
//!
//! Core library for docsmith, a thin documentation-generation service. It
//! provides the pieces below the HTTP boundary:
//!
//! - `docs/`: request/response models with enum validation at the wire.
//! - `prompts/`: deterministic prompt composition over fixed templates.
//! - `llm/`: the completion provider trait and the OpenAI client.
//! - `config/`: model constants, server defaults, and API key resolution.
//!
//! Each inbound request is handled independently with no shared mutable
//! state; the only blocking operation is the remote completion call, which
//! is surfaced as a single typed error on failure.

pub mod config;
pub mod docs;
pub mod llm;
pub mod prompts;

pub use docs::{
    DocType, DocumentationRequest, DocumentationResponse, StyleGuide, ValidationError,
};
pub use llm::{CompletionRequest, CompletionResponse, LLMError, LLMProvider, Message, OpenAIProvider};
pub use prompts::{PromptError, compose};
