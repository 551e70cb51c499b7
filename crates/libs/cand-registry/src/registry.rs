//! Name-keyed candidate registry.
//!
//! The registry is an ordered sequence: a candidate keeps the position of its
//! first insertion no matter how many times it is updated afterwards. Every
//! read and write goes through a single async mutex, so an upsert (scan plus
//! update-or-append) is atomic with respect to concurrent requests.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, trace};

use crate::candidate::Candidate;

/// What an upsert did to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No entry carried the name, the candidate was appended.
    Inserted,
    /// `matches` existing entries had their image url replaced in place.
    Updated { matches: usize },
}

/// Shared handle to the candidate collection.
///
/// Cloning is cheap and every clone sees the same state.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    candidates: Arc<Mutex<Vec<Candidate>>>,
}

impl Registry {
    /// Creates a registry seeded with `seed`.
    ///
    /// Seed entries are folded in through [`upsert`](Self::upsert) semantics,
    /// so duplicate names in the seed never break name uniqueness.
    pub fn new(seed: impl IntoIterator<Item = Candidate>) -> Self {
        let mut candidates = Vec::new();
        for candidate in seed {
            upsert_in(&mut candidates, candidate);
        }
        debug!("Registry created with {} seeded candidates", candidates.len());
        Self {
            candidates: Arc::new(Mutex::new(candidates)),
        }
    }

    /// Updates every entry named `candidate.name`, or appends `candidate` if
    /// there is none.
    pub async fn upsert(&self, candidate: Candidate) {
        let mut candidates = self.candidates.lock().await;
        upsert_in(&mut candidates, candidate);
    }

    /// Returns the current candidates in registry order.
    pub async fn list(&self) -> Vec<Candidate> {
        self.candidates.lock().await.clone()
    }

    /// Upserts `candidate` and snapshots the result under the same lock.
    ///
    /// The returned list is exactly the state produced by this upsert, never
    /// interleaved with a concurrent one.
    pub async fn upsert_and_list(&self, candidate: Candidate) -> (UpsertOutcome, Vec<Candidate>) {
        let mut candidates = self.candidates.lock().await;
        let outcome = upsert_in(&mut candidates, candidate);
        (outcome, candidates.clone())
    }

    pub async fn len(&self) -> usize {
        self.candidates.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.candidates.lock().await.is_empty()
    }
}

fn upsert_in(candidates: &mut Vec<Candidate>, candidate: Candidate) -> UpsertOutcome {
    let mut matches = 0;
    for existing in candidates
        .iter_mut()
        .filter(|existing| existing.name == candidate.name)
    {
        existing.name.clone_from(&candidate.name);
        existing.image_url.clone_from(&candidate.image_url);
        matches += 1;
    }

    if matches == 0 {
        trace!("Appending candidate '{}'", candidate.name);
        candidates.push(candidate);
        UpsertOutcome::Inserted
    } else {
        trace!("Updated {matches} entries named '{}'", candidate.name);
        UpsertOutcome::Updated { matches }
    }
}
