//! Route handlers

use super::page::INDEX_HTML;
use super::server::AppState;
use axum::{
    Json, Router,
    extract::State,
    response::Html,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tutor_domain::Question;

/// Body of `POST /solve`. A missing or null question is treated as empty.
#[derive(Debug, Default, Deserialize)]
pub struct SolveRequest {
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SolveResponse {
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

// ============================================================================
// Page
// ============================================================================

pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// ============================================================================
// Solve
// ============================================================================

pub fn solve_routes() -> Router<AppState> {
    Router::new().route("/solve", post(solve))
}

async fn solve(State(state): State<AppState>, Json(req): Json<SolveRequest>) -> Json<SolveResponse> {
    let question = Question::new(req.question.unwrap_or_default());
    let output = state.solver.execute(&question).await;
    debug!(source = %output.source, "Solved question");
    Json(SolveResponse {
        answer: output.answer.into_string(),
    })
}

// ============================================================================
// Health
// ============================================================================

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
