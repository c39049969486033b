//! HTTP surface for the tutor.
//!
//! - `GET /` serves a minimal question form
//! - `POST /solve` takes `{"question": "..."}` and replies `{"answer": "..."}`
//! - `GET /health` reports liveness

mod page;
mod routes;
mod server;

pub use routes::{HealthResponse, SolveRequest, SolveResponse};
pub use server::{AppState, MAX_BODY_BYTES, router, serve};
