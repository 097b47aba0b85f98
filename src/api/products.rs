use axum::{
    extract::{Extension, Path},
    routing::get,
    Json, Router,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::api::extract::ValidatedQuery;
use crate::entities::product::{self, Entity as ProductEntity};
use crate::error::StoreError;

//ROUTERS
pub fn products_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/products", get(get_products))
        .route("/products/:id", get(get_product))
        .layer(Extension(db))
}

async fn get_products(
    ValidatedQuery(params): ValidatedQuery<GetProductsQuery>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<Vec<product::Model>>, StoreError> {
    let mut half_result = ProductEntity::find();

    //Filter zone
    if let Some(name) = &params.name {
        half_result = half_result.filter(product::Column::Name.contains(name));
    }

    if let Some(min) = params.min {
        half_result = half_result.filter(product::Column::Price.gte(min));
    }

    if let Some(max) = params.max {
        half_result = half_result.filter(product::Column::Price.lte(max));
    }

    let products = half_result
        .order_by_asc(product::Column::Id)
        .all(&*db)
        .await?;
    Ok(Json(products))
}

async fn get_product(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> Result<Json<product::Model>, StoreError> {
    let result = ProductEntity::find_by_id(id).one(&*db).await?;
    match result {
        Some(prod) => Ok(Json(prod)),
        None => Err(StoreError::product_not_found(id)),
    }
}

//Structs
#[derive(Deserialize, Validate)]
struct GetProductsQuery {
    name: Option<String>,
    min: Option<f32>,
    max: Option<f32>,
}
