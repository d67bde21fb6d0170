//! Fixed instructional templates keyed by document type and style guide.

use crate::docs::{DocType, StyleGuide};
use crate::prompts::PromptError;

const GOOGLE_STYLE: &str = "\
Follow Google's Python style guide:
- Start with a one-line summary
- Add an extended description if needed
- List Args, Returns, Raises with proper indentation
- Include Examples section for complex functions";

const NUMPY_STYLE: &str = "\
Follow NumPy documentation style:
- Parameters section instead of Args
- Use dashed lines for section separation
- Include Examples in doctest format";

const SPHINX_STYLE: &str = "\
Follow Sphinx documentation style:
- Use :param: for parameters
- Use :type: for type hints
- Use :return: for return values
- Use :raises: for exceptions";

const API_TEMPLATE: &str = "\
Act as an API documentation specialist.
Document the following API endpoint using OpenAPI 3.0 style:

Include:
- Endpoint description
- Request/Response schemas
- Status codes
- Error responses
- Authentication requirements
- Rate limiting details
- Example requests/responses";

const ERROR_HANDLING_TEMPLATE: &str = "\
Act as a senior software architect.
Document the following error handling pattern:

Include:
- Error categorization
- Logging requirements
- Recovery strategies
- Client retry recommendations
- Example scenarios";

/// Style-specific instructional block for function documentation.
///
/// `Custom` has no block of its own and falls back to the Google
/// instructions. This is a documented fallback, not an error.
pub fn style_guide_instructions(style: StyleGuide) -> &'static str {
    match style {
        StyleGuide::Google | StyleGuide::Custom => GOOGLE_STYLE,
        StyleGuide::Numpy => NUMPY_STYLE,
        StyleGuide::Sphinx => SPHINX_STYLE,
    }
}

/// Base instructional template for the given document type.
///
/// Only the function template interpolates style instructions; the API and
/// error-handling templates are style-agnostic fixed text. `Database` and
/// `Workflow` have no template and fail fast instead of composing a
/// degenerate prompt.
pub fn base_template(doc_type: DocType, style: StyleGuide) -> Result<String, PromptError> {
    match doc_type {
        DocType::Function => {
            let style_instructions = style_guide_instructions(style);
            Ok(format!(
                "\
Act as an expert technical writer specializing in Python documentation.
Document the following function according to these guidelines:

{style_instructions}

Additional requirements:
- Include type hints
- Document all exceptions
- Add security considerations if relevant
- Provide usage examples"
            ))
        }
        DocType::Api => Ok(API_TEMPLATE.to_string()),
        DocType::ErrorHandling => Ok(ERROR_HANDLING_TEMPLATE.to_string()),
        DocType::Database | DocType::Workflow => Err(PromptError::UnsupportedDocType(doc_type)),
    }
}
