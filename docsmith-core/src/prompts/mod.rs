//! Prompt composition for documentation generation.
//!
//! Pure string assembly over a closed set of document types and style
//! guides. Identical inputs always yield a byte-identical prompt; there is
//! no I/O and no state here.

mod templates;

pub use templates::{base_template, style_guide_instructions};

use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;

use crate::docs::{DocType, StyleGuide};

/// Composition failure: the document type has no template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("unsupported document type `{0}`: no documentation template exists for it")]
    UnsupportedDocType(DocType),
}

/// Compose the full prompt sent to the completion service.
///
/// Layout: base template, the content to document, then optional context
/// and reference-example sections. Examples keep their input order and are
/// labeled with 1-based ordinals.
pub fn compose(
    content: &str,
    doc_type: DocType,
    style_guide: StyleGuide,
    context: Option<&IndexMap<String, Value>>,
    examples: Option<&[String]>,
) -> Result<String, PromptError> {
    let base = base_template(doc_type, style_guide)?;

    let mut prompt = format!("{base}\n\nContent to document:\n{content}\n");

    if let Some(context) = context {
        if !context.is_empty() {
            prompt.push_str("\nAdditional context:\n");
            for (key, value) in context {
                prompt.push_str(&format!("- {key}: {}\n", render_context_value(value)));
            }
        }
    }

    if let Some(examples) = examples {
        if !examples.is_empty() {
            prompt.push_str("\nReference examples:\n");
            for (i, example) in examples.iter().enumerate() {
                prompt.push_str(&format!("\nExample {}:\n{example}\n", i + 1));
            }
        }
    }

    Ok(prompt)
}

/// Render a context value without JSON string quoting for plain strings.
fn render_context_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
