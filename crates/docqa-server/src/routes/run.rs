//! Document question-answering routes.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::fetch::fetch_document;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/run", post(run_submission))
        .route("/health", get(run_health))
}

/// Body of `POST /hackrx/run`.
#[derive(Debug, Clone, Deserialize)]
pub struct RunRequest {
    /// URL of the source document.
    pub documents: String,
    #[serde(default)]
    pub questions: Vec<String>,
}

/// One answer per retained question, in question order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResponse {
    pub answers: Vec<String>,
}

/// POST /hackrx/run: fetch the document and answer every question.
async fn run_submission(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RunRequest>,
) -> Response {
    let request_id = Uuid::new_v4();
    info!(
        "Run {}: {} question(s) for {}",
        request_id,
        request.questions.len(),
        request.documents
    );

    let document = match fetch_document(&state.http, &request.documents).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Run {}: {}", request_id, e);
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "detail": format!("Failed to download document: {e}"),
                })),
            )
                .into_response();
        }
    };

    let answers = state
        .pipeline
        .answer_document(document, &request.questions)
        .await;

    info!("Run {}: returned {} answer(s)", request_id, answers.len());
    Json(RunResponse { answers }).into_response()
}

/// GET /hackrx/health: status plus the active request limits.
async fn run_health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let config = &state.config;
    Json(serde_json::json!({
        "status": "healthy",
        "service": "docqa",
        "endpoint": "/hackrx/run",
        "limits": {
            "max_questions": config.max_questions,
            "context_chars": config.context_chars,
            "worker_limit": config.worker_limit,
            "question_timeout_ms": config.question_timeout.as_millis() as u64,
            "answer_max_len": config.answer_max_len,
        },
    }))
}
