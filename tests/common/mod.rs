use std::sync::Arc;

use sea_orm::DatabaseConnection;

use rust_yabloki::api::create_api_router;
use rust_yabloki::entities::{connect_database, seed_catalog, setup_schema};

#[allow(dead_code)]
pub struct TestApp {
    pub address: String,
    pub db: Arc<DatabaseConnection>,
    pub client: reqwest::Client,
}

/// Stands up the whole router over a fresh in-memory database on an
/// ephemeral port, so every test talks to its own isolated server.
pub async fn spawn_app() -> TestApp {
    let db = connect_database("sqlite::memory:")
        .await
        .expect("Failed to open the in-memory database");
    setup_schema(&db).await;

    let shared_db = Arc::new(db);
    seed_catalog(shared_db.clone()).await;

    let app = create_api_router(shared_db.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind an ephemeral port");
    let address = format!(
        "http://{}",
        listener.local_addr().expect("Listener has no local address")
    );
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server stopped");
    });

    TestApp {
        address,
        db: shared_db,
        client: reqwest::Client::new(),
    }
}

#[allow(dead_code)]
pub async fn fetch_products(app: &TestApp) -> Vec<serde_json::Value> {
    let response = app
        .client
        .get(format!("{}/api/products", app.address))
        .send()
        .await
        .expect("Failed to send products request");
    assert!(response.status().is_success());
    response
        .json::<Vec<serde_json::Value>>()
        .await
        .expect("Failed to parse products JSON")
}
