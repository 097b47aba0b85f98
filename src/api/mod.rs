pub mod cart;
pub mod extract;
pub mod products;
pub mod wishlist;

use axum::{middleware::from_fn, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::middleware::logging::logging_middleware;
use cart::cart_router;
use products::products_router;
use wishlist::wishlist_router;

pub fn create_api_router(shared_db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .nest("/api", products_router(shared_db.clone()))
        .nest("/api", cart_router(shared_db.clone()))
        .nest("/api", wishlist_router(shared_db.clone()))
        .layer(from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
