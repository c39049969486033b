//! HTTP server wiring

use super::routes;
use axum::Router;
use std::io;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tutor_application::SolveQuestionUseCase;

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub solver: Arc<SolveQuestionUseCase>,
}

impl AppState {
    pub fn new(solver: SolveQuestionUseCase) -> Self {
        Self {
            solver: Arc::new(solver),
        }
    }
}

/// Build the router with all routes and middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::page_routes())
        .merge(routes::solve_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}

/// Serve requests on `listener` until the process is stopped
pub async fn serve(listener: TcpListener, state: AppState) -> io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on http://{}", addr);
    }
    axum::serve(listener, router(state)).await
}
