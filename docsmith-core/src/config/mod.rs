//! Docsmith configuration module
//!
//! Centralizes model identifiers, sampling parameters, server defaults, and
//! API key resolution so nothing is hardcoded at call sites.

pub mod api_keys;
pub mod constants;

pub use api_keys::{load_dotenv, resolve_api_key, resolve_default_api_key};
