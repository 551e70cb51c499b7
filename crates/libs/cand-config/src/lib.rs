//! Configuration management for the candidate registry service.
//!
//! # Usage
//!
//! ```rust
//! use cand_config::CandConfig;
//!
//! let config = CandConfig::from_toml(
//!     r#"
//!     bind = "0.0.0.0:8080"
//!
//!     [[seed]]
//!     name = "Jane Doe"
//!     imageUrl = "http://example.com/janedoe.jpg"
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.bind.port(), 8080);
//! assert_eq!(config.seed.len(), 1);
//! ```

pub mod cand_config;
pub mod error;
pub mod prelude;

pub use cand_config::CandConfig;
