//! Route table.

use axum::{
    Router,
    routing::{get, post},
};
use cand_registry::Registry;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::candidate::{add_candidate, invalid_method, list_candidates};

pub const ADD_CANDIDATE_PATH: &str = "/addCandidate";
pub const CANDIDATES_PATH: &str = "/candidates";

/// Builds the service router around `registry`.
///
/// Any path without a route, and any method a route does not accept, is
/// answered by [`invalid_method`].
pub fn router(registry: Registry) -> Router {
    Router::new()
        .route(ADD_CANDIDATE_PATH, post(add_candidate).fallback(invalid_method))
        .route(CANDIDATES_PATH, get(list_candidates).fallback(invalid_method))
        .fallback(invalid_method)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(registry)
}
