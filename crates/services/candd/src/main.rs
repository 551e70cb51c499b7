//! Candidate Registry Service (candd)
//!
//! Keeps an ordered, name-keyed list of candidates in memory and serves it
//! over HTTP:
//!
//! - **POST /addCandidate**: upsert a candidate by name, answer with the whole list
//! - **GET /candidates**: answer with the whole list
//! - anything else: `405` with a `No such endpoint` envelope
//!
//! State is lost when the process exits.

use clap::Parser;
use cand_config::CandConfig;
use cand_registry::Registry;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api::setup_api, cli::Cli, prelude::*};

mod api;
mod cli;
mod error;
mod prelude;

/// Main entry point for the candidate service.
///
/// Initializes logging, resolves configuration (defaults, file, environment,
/// flags), seeds the registry and serves until Ctrl-C or a server failure.
/// On Ctrl-C in-flight requests are allowed to finish.
///
/// # Examples
///
/// ```bash
/// export CANDD_BIND=0.0.0.0:3000
/// candd --config candd.toml
/// ```
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}=debug,cand_web=debug,cand_registry=debug,tower_http=debug",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = CandConfig::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }

    let registry = Registry::new(config.seed);
    let (_, api_handle) = setup_api(config.bind, registry, shutdown_signal()).await?;

    api_handle.await?
}

/// Resolves on Ctrl-C. If the handler cannot be installed the server keeps
/// running until killed.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutting down"),
        Err(err) => {
            tracing::error!("Failed to listen for Ctrl-C: {err}");
            std::future::pending::<()>().await;
        }
    }
}
