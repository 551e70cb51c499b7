//! Web layer of the candidate registry service.
//!
//! Turns HTTP requests into [`cand_registry::Registry`] operations and shapes
//! every response as JSON: the candidate array on success, a status/message
//! envelope otherwise.

pub mod basic_response;
pub mod candidate;
pub mod error;
pub mod payload;
pub mod prelude;
pub mod router;

pub use router::router;
