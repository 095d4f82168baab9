//! Axum app: state, router and handlers.
//!
//! `POST /recommend` runs the recommender; any other method on that path answers 405.
//! `GET /health` is a liveness probe.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method},
    routing::{get, post},
    Json, Router,
};
use humidor::{RecommendRequest, RecommendResponse, Recommender};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

use crate::error::ApiError;

/// Shared state for the HTTP server. Immutable; cloned per request as an `Arc`.
pub struct AppState {
    pub recommender: Arc<Recommender>,
}

/// Builds the router with `/recommend`, `/health` and a permissive CORS layer.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/recommend", post(recommend).fallback(method_not_allowed))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

/// Reads the body leniently so malformed JSON ends up as "Invalid input" rather than an
/// extractor rejection.
async fn recommend(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<RecommendResponse>, ApiError> {
    let request = RecommendRequest::from_body_lenient(&body);
    debug!(cigar = %request.cigar, avoid = request.avoid.len(), "recommend request");
    let response = state.recommender.recommend(&request).await?;
    Ok(Json(response))
}

async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
