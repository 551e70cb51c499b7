use std::{future::Future, net::SocketAddr};

use cand_registry::Registry;
use tokio::task::JoinHandle;
use tracing::info;

use crate::prelude::*;

/// Binds `bind` and serves the candidate routes on a background task.
///
/// Once `shutdown` resolves the server stops accepting connections, lets
/// in-flight requests finish and the task completes. Returns the bound
/// address, which differs from `bind` when port 0 was requested.
pub async fn setup_api<F>(
    bind: SocketAddr,
    registry: Registry,
    shutdown: F,
) -> Result<(SocketAddr, JoinHandle<Result<()>>)>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = cand_web::router(registry);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    let local_addr = listener.local_addr()?;
    info!("listening on {local_addr}");
    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;
        info!("API server stopped");
        Ok(())
    });

    Ok((local_addr, handle))
}
