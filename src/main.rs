mod server;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use docsmith_core::config::{self, constants::completion, constants::defaults};
use docsmith_core::llm::{LLMProvider, OpenAIProvider};
use server::AppState;

#[derive(Parser, Debug)]
#[command(
    name = "docsmith",
    version,
    about = "Documentation generation service backed by an LLM completion API"
)]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = defaults::DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = defaults::DEFAULT_PORT)]
    port: u16,

    /// Completion model id stamped into response metadata
    #[arg(long, default_value = completion::DEFAULT_MODEL)]
    model: String,

    /// Environment variable holding the completion API key
    #[arg(long, default_value = completion::API_KEY_ENV)]
    api_key_env: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    config::load_dotenv()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let api_key = config::resolve_api_key(&args.api_key_env)?;
    let provider: Arc<dyn LLMProvider> =
        Arc::new(OpenAIProvider::with_model(api_key, args.model.clone()));

    let state = AppState {
        provider,
        model: args.model,
    };

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    tracing::info!(%addr, "docsmith listening");

    axum::serve(listener, server::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install ctrl-c handler");
    }
}
