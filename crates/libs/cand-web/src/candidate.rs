//! Candidate handlers.

use axum::{
    Json,
    extract::State,
    http::{Method, Uri},
};
use cand_registry::{Candidate, Registry, UpsertOutcome};
use tracing::{debug, info};

use crate::{payload::Payload, prelude::*};

/// Upserts the posted candidate and answers with the whole registry.
///
/// An undecodable body is rejected by [`Payload`] before the registry is
/// touched.
#[axum::debug_handler]
pub async fn add_candidate(
    State(registry): State<Registry>,
    Payload(candidate): Payload<Candidate>,
) -> Json<Vec<Candidate>> {
    let name = candidate.name.clone();
    let (outcome, candidates) = registry.upsert_and_list(candidate).await;
    match outcome {
        UpsertOutcome::Inserted => info!("Added candidate '{name}'"),
        UpsertOutcome::Updated { matches } => {
            debug!("Updated candidate '{name}' ({matches} entries)")
        }
    }
    Json(candidates)
}

/// Lists the registry in order.
pub async fn list_candidates(State(registry): State<Registry>) -> Json<Vec<Candidate>> {
    Json(registry.list().await)
}

/// Fallback for unknown routes and disallowed methods.
pub async fn invalid_method(method: Method, uri: Uri) -> Error {
    debug!("No endpoint for {method} {uri}");
    Error::NoSuchEndpoint
}
