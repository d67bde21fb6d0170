//! API key retrieval from environment variables and .env files.
//!
//! Environment variables take priority; a `.env` file in the working
//! directory is loaded once at startup as a convenience for local runs.

use anyhow::Result;
use std::env;

use crate::config::constants::completion;

/// Load environment variables from a .env file if one exists.
///
/// A missing file is not an error; any other failure is reported as a
/// warning and startup continues with the process environment as-is.
pub fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded environment variables from .env");
            Ok(())
        }
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => {
            tracing::warn!(error = %e, "failed to load .env file");
            Ok(())
        }
    }
}

/// Resolve the completion-service API key from the given environment variable.
pub fn resolve_api_key(env_var: &str) -> Result<String> {
    match env::var(env_var) {
        Ok(key) if !key.is_empty() => Ok(key),
        _ => Err(anyhow::anyhow!(
            "No API key found. Set {} in your environment or in a .env file",
            env_var
        )),
    }
}

/// Resolve the API key from the default `OPENAI_API_KEY` variable.
pub fn resolve_default_api_key() -> Result<String> {
    resolve_api_key(completion::API_KEY_ENV)
}
