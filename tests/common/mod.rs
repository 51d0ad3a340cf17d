//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use product_api::http::server::{build_router, AppState};
use product_api::observability::RequestCounters;
use product_api::store::MemoryStore;

/// A live service on an ephemeral port, with handles to the state the
/// assertions need.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    pub store: Arc<MemoryStore>,
    pub counters: Arc<RequestCounters>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Spawn the service against a fresh in-memory store.
pub async fn spawn_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let counters = Arc::new(RequestCounters::new());
    let state = AppState {
        store: store.clone(),
        counters: counters.clone(),
    };
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("build client");

    TestApp {
        addr,
        client,
        store,
        counters,
    }
}
