pub mod cart;
pub mod wishlist;

use sea_orm::{prelude::DateTimeUtc, ConnectionTrait, EntityTrait, QueryOrder};
use serde::Serialize;

use crate::entities::{
    cart as cart_entity, cart::Entity as CartEntity, product,
    product::Entity as ProductEntity, wishlist as wishlist_entity,
    wishlist::Entity as WishlistEntity,
};
use crate::error::StoreResult;

/// One cart row with its product reference resolved. `product` is `None`
/// when the referenced row is gone; readers must tolerate that instead of
/// failing the whole collection.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: i32,
    pub product_id: i32,
    pub quantity: u32,
    pub product: Option<product::Model>,
}

impl CartLine {
    fn new((entry, product): (cart_entity::Model, Option<product::Model>)) -> CartLine {
        CartLine {
            id: entry.id,
            product_id: entry.product_id,
            quantity: entry.quantity,
            product,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishLine {
    pub id: i32,
    pub product_id: i32,
    pub created_at: DateTimeUtc,
    pub product: Option<product::Model>,
}

impl WishLine {
    fn new((entry, product): (wishlist_entity::Model, Option<product::Model>)) -> WishLine {
        WishLine {
            id: entry.id,
            product_id: entry.product_id,
            created_at: entry.created_at,
            product,
        }
    }
}

//One-hop joins so a single query hands back full product records.
//Ordered by row id, which keeps the display order stable between calls.

pub(crate) async fn load_cart<C: ConnectionTrait>(conn: &C) -> StoreResult<Vec<CartLine>> {
    let rows = CartEntity::find()
        .find_also_related(ProductEntity)
        .order_by_asc(cart_entity::Column::Id)
        .all(conn)
        .await?;
    Ok(rows.into_iter().map(CartLine::new).collect())
}

pub(crate) async fn load_wishlist<C: ConnectionTrait>(conn: &C) -> StoreResult<Vec<WishLine>> {
    let rows = WishlistEntity::find()
        .find_also_related(ProductEntity)
        .order_by_asc(wishlist_entity::Column::Id)
        .all(conn)
        .await?;
    Ok(rows.into_iter().map(WishLine::new).collect())
}
