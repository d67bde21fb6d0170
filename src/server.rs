//! HTTP surface for the documentation service.
//!
//! Two routes: a liveness check and the documentation endpoint. All
//! failures below the handler are mapped here, once, to a uniform JSON
//! error body; nothing deeper handles errors beyond raising them.

use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use docsmith_core::config::constants::{completion, defaults, prompts as prompt_constants};
use docsmith_core::docs::{DocumentationRequest, DocumentationResponse, ValidationError};
use docsmith_core::llm::{CompletionRequest, LLMError, LLMProvider, Message};
use docsmith_core::prompts::{self, PromptError};

/// Shared per-request state: the completion provider and the model id
/// stamped into response metadata.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn LLMProvider>,
    pub model: String,
}

/// Build the service router with CORS for the local frontend origin.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(HeaderValue::from_static(defaults::FRONTEND_ORIGIN))
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(read_root))
        .route("/generate-docs", post(generate_docs))
        .layer(cors)
        .with_state(state)
}

/// Uniform error response: `{"detail": ...}` with an HTTP status.
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: err.to_string(),
        }
    }
}

impl From<PromptError> for ApiError {
    fn from(err: PromptError) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: err.to_string(),
        }
    }
}

impl From<LLMError> for ApiError {
    fn from(err: LLMError) -> Self {
        tracing::error!(error = %err, "completion call failed");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: err.to_string(),
        }
    }
}

/// Liveness check.
async fn read_root() -> Json<Value> {
    Json(json!({ "message": "docsmith documentation service" }))
}

/// Validate the request, compose the prompt, call the completion
/// service, and wrap the generated text with response metadata.
async fn generate_docs(
    State(state): State<AppState>,
    Json(request): Json<DocumentationRequest>,
) -> Result<Json<DocumentationResponse>, ApiError> {
    request.validate()?;

    let prompt = prompts::compose(
        &request.content,
        request.doc_type,
        request.style_guide,
        request.context.as_ref(),
        request.examples.as_deref(),
    )?;

    let completion_request = CompletionRequest {
        messages: vec![
            Message::system(prompt_constants::SYSTEM_PERSONA.to_string()),
            Message::user(prompt),
        ],
        model: state.model.clone(),
        max_tokens: Some(completion::MAX_OUTPUT_TOKENS),
        temperature: Some(completion::TEMPERATURE),
    };

    let response = state.provider.generate(completion_request).await?;

    tracing::info!(
        doc_type = %request.doc_type,
        style_guide = %request.style_guide,
        "generated documentation"
    );

    let documentation = response.content.unwrap_or_default();

    Ok(Json(DocumentationResponse::success(
        documentation,
        &state.model,
        request.doc_type,
        request.style_guide,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, header};
    use docsmith_core::llm::{CompletionResponse, FinishReason};
    use http_body_util::BodyExt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    /// Counts calls and either returns canned text or fails.
    struct MockProvider {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl LLMProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        async fn generate(
            &self,
            request: CompletionRequest,
        ) -> Result<CompletionResponse, LLMError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(LLMError::Provider("quota exceeded".to_string()));
            }
            assert_eq!(request.messages.len(), 2);
            assert_eq!(
                request.messages[0].content,
                prompt_constants::SYSTEM_PERSONA
            );
            Ok(CompletionResponse {
                content: Some("Generated documentation.".to_string()),
                usage: None,
                finish_reason: FinishReason::Stop,
            })
        }
    }

    fn test_app(fail: bool) -> (Router, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let state = AppState {
            provider: Arc::new(MockProvider {
                calls: calls.clone(),
                fail,
            }),
            model: completion::DEFAULT_MODEL.to_string(),
        };
        (router(state), calls)
    }

    fn post_request(payload: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/generate-docs")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    async fn response_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn liveness_route_responds() {
        let (app, _) = test_app(false);
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn generate_docs_returns_documentation_with_metadata() {
        let (app, calls) = test_app(false);
        let response = app
            .oneshot(post_request(json!({
                "content": "def add(a, b): return a + b",
                "doc_type": "function",
                "style_guide": "numpy"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["documentation"], "Generated documentation.");
        assert_eq!(body["metadata"]["status"], "success");
        assert_eq!(body["metadata"]["model"], completion::DEFAULT_MODEL);
        assert_eq!(body["metadata"]["doc_type"], "function");
        assert_eq!(body["metadata"]["style_guide"], "numpy");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unsupported_doc_type_is_rejected_before_remote_call() {
        let (app, calls) = test_app(false);
        let response = app
            .oneshot(post_request(json!({
                "content": "CREATE TABLE users (id INT)",
                "doc_type": "database"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = response_json(response).await;
        assert!(body["detail"].as_str().unwrap().contains("database"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_content_is_rejected_before_remote_call() {
        let (app, calls) = test_app(false);
        let response = app
            .oneshot(post_request(json!({
                "content": "   ",
                "doc_type": "function"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = response_json(response).await;
        assert!(body["detail"].as_str().unwrap().contains("content"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unknown_doc_type_string_is_a_client_error() {
        let (app, calls) = test_app(false);
        let response = app
            .oneshot(post_request(json!({
                "content": "something",
                "doc_type": "unknown"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn provider_failure_surfaces_as_internal_error() {
        let (app, calls) = test_app(true);
        let response = app
            .oneshot(post_request(json!({
                "content": "def add(a, b): return a + b",
                "doc_type": "function"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response_json(response).await;
        assert!(body["detail"].as_str().unwrap().contains("quota exceeded"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
