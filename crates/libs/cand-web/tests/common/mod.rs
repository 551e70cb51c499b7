#![allow(dead_code)]

use cand_registry::{Candidate, Registry};

pub mod api_client;

use api_client::ApiClient;

pub const JOHN_DOE: &str = "John Doe";
pub const JOHN_DOE_URL: &str = "http://example.com/johndoe.jpg";
pub const JANE_DOE: &str = "Jane Doe";
pub const JANE_DOE_URL: &str = "http://example.com/janedoe.jpg";

/// A running service with its own registry, bound to an ephemeral port.
pub struct TestContext {
    pub api: ApiClient,
    pub registry: Registry,
}

impl TestContext {
    pub async fn seeded() -> Self {
        Self::with_seed(vec![Candidate::new(JOHN_DOE, JOHN_DOE_URL)]).await
    }

    pub async fn with_seed(seed: Vec<Candidate>) -> Self {
        let registry = Registry::new(seed);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        let app = cand_web::router(registry.clone());
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server stopped");
        });

        Self {
            api: ApiClient::new(format!("http://{addr}")),
            registry,
        }
    }
}
