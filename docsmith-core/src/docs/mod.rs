//! Request and response models for the documentation service.
//!
//! `DocumentationRequest` is validated once at the request boundary and is
//! immutable afterwards; composition and the completion call only borrow it.
//! Unknown `doc_type` / `style_guide` wire values fail serde deserialization
//! before any prompt is composed.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Category of artifact being documented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    Function,
    Api,
    ErrorHandling,
    Database,
    Workflow,
}

impl DocType {
    /// Wire value used in request/response JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::Function => "function",
            DocType::Api => "api",
            DocType::ErrorHandling => "error_handling",
            DocType::Database => "database",
            DocType::Workflow => "workflow",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Documentation formatting convention requested by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleGuide {
    #[default]
    Google,
    Numpy,
    Sphinx,
    Custom,
}

impl StyleGuide {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleGuide::Google => "google",
            StyleGuide::Numpy => "numpy",
            StyleGuide::Sphinx => "sphinx",
            StyleGuide::Custom => "custom",
        }
    }
}

impl fmt::Display for StyleGuide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request validation failure, naming the offending field
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),
}

/// Inbound documentation request
///
/// `context` uses an insertion-ordered map so the rendered prompt is
/// deterministic for identical inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentationRequest {
    /// Code or content to document
    pub content: String,
    pub doc_type: DocType,
    #[serde(default)]
    pub style_guide: StyleGuide,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<IndexMap<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
}

impl DocumentationRequest {
    /// Check shape constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.content.trim().is_empty() {
            return Err(ValidationError::EmptyField("content"));
        }
        Ok(())
    }
}

/// Generated documentation plus request metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentationResponse {
    pub documentation: String,
    #[serde(default)]
    pub metadata: IndexMap<String, Value>,
}

impl DocumentationResponse {
    /// Build a success response, stamping the standard metadata keys.
    pub fn success(
        documentation: String,
        model: &str,
        doc_type: DocType,
        style_guide: StyleGuide,
    ) -> Self {
        let mut metadata = IndexMap::new();
        metadata.insert("status".to_string(), Value::from("success"));
        metadata.insert("model".to_string(), Value::from(model));
        metadata.insert("doc_type".to_string(), Value::from(doc_type.as_str()));
        metadata.insert(
            "style_guide".to_string(),
            Value::from(style_guide.as_str()),
        );
        Self {
            documentation,
            metadata,
        }
    }
}
