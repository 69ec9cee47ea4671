use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};

use crate::core::config::DatabaseConfig;
use crate::core::database::PersistenceGateway;
use crate::features;

/// Initialized gateway over a private in-memory database
pub async fn test_gateway() -> Arc<PersistenceGateway> {
    let gateway = PersistenceGateway::connect(&DatabaseConfig::in_memory(), features::schemas())
        .await
        .expect("in-memory database should open");
    gateway
        .initialize()
        .await
        .expect("schema should initialize");
    Arc::new(gateway)
}

/// Test server serving every resource route over a fresh database
pub async fn test_server() -> TestServer {
    let gateway = test_gateway().await;
    TestServer::new(features::routes(gateway)).expect("test server should start")
}

pub fn water_quality_payload() -> Value {
    json!({ "date": "2024-01-15", "ph": 7.2, "turbidity": 5, "ecoli": 10 })
}

pub fn waste_management_payload() -> Value {
    json!({
        "date": "2024-02-01T08:00:00Z",
        "organicWaste": 400.0,
        "plasticWaste": 300.0,
        "paperWaste": 200.0,
        "metalWaste": 100.0
    })
}

/// Serve every resource route on an ephemeral local port, returning the API base URL
pub async fn spawn_api() -> String {
    let app = features::routes(test_gateway().await);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("listener should have an address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test api should serve");
    });

    format!("http://{}/api", addr)
}
