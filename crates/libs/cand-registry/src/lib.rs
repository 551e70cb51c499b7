//! Candidate storage for the candidate registry service.
//!
//! Holds the ordered, name-keyed collection of candidates that the web layer
//! reads and upserts into. State lives in process memory only.
//!
//! # Usage
//!
//! ```rust
//! use cand_registry::{Candidate, Registry};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let registry = Registry::new(Vec::new());
//! registry
//!     .upsert(Candidate::new("Jane Doe", "http://example.com/janedoe.jpg"))
//!     .await;
//! assert_eq!(registry.list().await.len(), 1);
//! # }
//! ```

pub mod candidate;
pub mod registry;

pub use candidate::Candidate;
pub use registry::{Registry, UpsertOutcome};
