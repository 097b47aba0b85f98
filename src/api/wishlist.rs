use axum::{
    extract::{Extension, Path},
    routing::{delete, get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::api::extract::ValidatedJson;
use crate::engine;
use crate::error::{MoveError, StoreError};
use crate::store::wishlist::{self, ToggleAction};
use crate::store::WishLine;

//ROUTERS
pub fn wishlist_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/wishlist", get(get_wishlist))
        .route("/wishlist/toggle", post(toggle_product))
        .route("/wishlist/:id", delete(remove_entry))
        .route("/wishlist/:id/move-to-cart", post(move_entry_to_cart))
        .layer(Extension(db))
}

async fn get_wishlist(
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<Vec<WishLine>>, StoreError> {
    let lines = wishlist::fetch_wishlist(&db).await?;
    Ok(Json(lines))
}

async fn toggle_product(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    ValidatedJson(payload): ValidatedJson<ToggleProduct>,
) -> Result<Json<serde_json::Value>, StoreError> {
    tracing::debug!("->> called toggle_product with payload: {:?}", payload);
    let (action, _) = wishlist::toggle(&db, payload.product_id).await?;
    let message = match action {
        ToggleAction::Added => "Added to wishlist",
        ToggleAction::Removed => "Removed from wishlist",
    };
    Ok(Json(json!({ "message": message, "action": action })))
}

async fn remove_entry(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<serde_json::Value>, StoreError> {
    let lines = wishlist::remove_by_id(&db, id).await?;
    Ok(Json(json!({
        "message": "Item removed from wishlist",
        "wishlist": lines,
    })))
}

async fn move_entry_to_cart(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<serde_json::Value>, MoveError> {
    let outcome = engine::move_to_cart(&db, id).await?;
    Ok(Json(json!({
        "message": "Moved to cart",
        "cart": outcome.cart,
        "wishlist": outcome.wishlist,
    })))
}

//Structs
#[derive(Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
struct ToggleProduct {
    product_id: i32,
}
