use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
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
use crate::store::{cart, CartLine};

//ROUTERS
pub fn cart_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/cart", get(get_cart).post(add_product))
        .route("/cart/:id", put(update_entry).delete(remove_entry))
        .route("/cart/:id/move-to-wishlist", post(move_entry_to_wishlist))
        .layer(Extension(db))
}

async fn get_cart(
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<Vec<CartLine>>, StoreError> {
    let lines = cart::fetch_cart(&db).await?;
    Ok(Json(lines))
}

async fn add_product(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    ValidatedJson(payload): ValidatedJson<AddProduct>,
) -> Result<impl IntoResponse, StoreError> {
    tracing::debug!("->> called add_product with payload: {:?}", payload);
    let lines = cart::add_to_cart(&db, payload.product_id, payload.quantity).await?;
    Ok((StatusCode::CREATED, Json(lines)))
}

async fn update_entry(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    ValidatedJson(payload): ValidatedJson<UpdateQuantity>,
) -> Result<Json<Vec<CartLine>>, StoreError> {
    //zero or negative means the client wants the row gone
    let lines = if payload.quantity < 1 {
        cart::remove_from_cart(&db, id).await?
    } else {
        let quantity = u32::try_from(payload.quantity)
            .map_err(|_| StoreError::Validation("Quantity is out of range".to_string()))?;
        cart::set_quantity(&db, id, quantity).await?
    };
    Ok(Json(lines))
}

async fn remove_entry(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<Vec<CartLine>>, StoreError> {
    let lines = cart::remove_from_cart(&db, id).await?;
    Ok(Json(lines))
}

async fn move_entry_to_wishlist(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<serde_json::Value>, MoveError> {
    let outcome = engine::move_to_wishlist(&db, id).await?;
    Ok(Json(json!({
        "message": "Moved to wishlist",
        "cart": outcome.cart,
        "wishlist": outcome.wishlist,
    })))
}

//Structs
#[derive(Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
struct AddProduct {
    product_id: i32,
    #[validate(range(min = 1, message = "Quantity should be greater than 0"))]
    quantity: u32,
}

#[derive(Deserialize, Debug, Validate)]
struct UpdateQuantity {
    quantity: i64,
}
