use axum::{
    Router,
    extract::State,
    http::HeaderValue,
    response::Json,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::analysis::{AnalysisKind, normalize_output};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::llm::CompletionInvoker;
use crate::models::{EmotionRequest, SymptomRequest};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub invoker: CompletionInvoker,
}

pub fn create_app(config: AppConfig) -> Result<Router, AppError> {
    let cors = cors_layer(&config.allowed_origin)?;
    let invoker = CompletionInvoker::new(&config);
    let app_state = AppState {
        config: Arc::new(config),
        invoker,
    };
    Ok(build_router(app_state, cors))
}

/// Cross-origin access for exactly one pre-registered browser origin, with
/// all methods and headers allowed for it.
fn cors_layer(origin: &str) -> Result<CorsLayer, AppError> {
    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|_| AppError::Config(format!("invalid ALLOWED_ORIGIN: {origin}")))?;

    // List semantics: the header is only echoed back when the request
    // origin matches the registered one.
    Ok(CorsLayer::new()
        .allow_origin([origin])
        .allow_methods(Any)
        .allow_headers(Any))
}

fn build_router(app_state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/analyze-symptoms", post(analyze_symptoms))
        .route("/analyze-emotions", post(analyze_emotions))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

async fn analyze_symptoms(
    State(state): State<AppState>,
    Json(request): Json<SymptomRequest>,
) -> Result<Json<Value>, AppError> {
    info!(language = %request.language, "symptom analysis request");
    run_analysis(&state, AnalysisKind::Symptoms, &request.symptoms, &request.language).await
}

async fn analyze_emotions(
    State(state): State<AppState>,
    Json(request): Json<EmotionRequest>,
) -> Result<Json<Value>, AppError> {
    info!(language = %request.language, "emotion analysis request");
    run_analysis(&state, AnalysisKind::Emotions, &request.emotions, &request.language).await
}

/// The whole pipeline: build prompt, invoke, normalize. Completion failures
/// bubble up as `AppError`; parse failures come back as a 200 envelope from
/// `normalize_output`.
async fn run_analysis(
    state: &AppState,
    kind: AnalysisKind,
    text: &str,
    language: &str,
) -> Result<Json<Value>, AppError> {
    let user_prompt = kind.user_prompt(text, language);
    let raw = state
        .invoker
        .complete(kind.system_prompt(), &user_prompt)
        .await?;

    Ok(Json(normalize_output(kind, &raw, state.config.schema_check)))
}
