//! Error types for the candidate service.

/// Errors that can stop the candidate service.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] cand_config::error::Error),

    #[error(transparent)]
    Join(#[from] tokio::task::JoinError),
}
