//! Provider-specific completion clients.

pub mod openai;

pub use openai::OpenAIProvider;
