use std::sync::Arc;

use rust_yabloki::api::create_api_router;
use rust_yabloki::config::Config;
use rust_yabloki::entities::{connect_database, seed_catalog, setup_schema};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();

    let config = Config::from_env().expect("Bad environment configuration");
    let db = connect_database(&config.database_url)
        .await
        .expect("Failed to connect to the database");
    setup_schema(&db).await;

    let shared_db = Arc::new(db);

    seed_catalog(shared_db.clone()).await;

    let app = create_api_router(shared_db);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind the listen address");
    println!("Running at {:?}", listener);
    axum::serve(listener, app).await.unwrap();
}
