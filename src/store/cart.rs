//! Cart store: one row per distinct product, mutations return the fresh
//! resolved collection so callers never trust a stale local mirror.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
    TransactionTrait,
};

use super::{load_cart, CartLine};
use crate::entities::{cart, cart::Entity as CartEntity, product::Entity as ProductEntity};
use crate::error::{StoreError, StoreResult};

pub async fn fetch_cart(db: &DatabaseConnection) -> StoreResult<Vec<CartLine>> {
    load_cart(db).await
}

pub async fn find_entry(db: &DatabaseConnection, id: i32) -> StoreResult<Option<cart::Model>> {
    Ok(CartEntity::find_by_id(id).one(db).await?)
}

/// Find-or-increment: a product already in the cart gets its quantity bumped
/// on the same row, anything else gets a new row. Not safe to blindly retry.
pub async fn add_to_cart(
    db: &DatabaseConnection,
    product_id: i32,
    quantity: u32,
) -> StoreResult<Vec<CartLine>> {
    if quantity < 1 {
        return Err(StoreError::Validation(
            "Quantity should be greater than 0".to_string(),
        ));
    }

    let txn = db.begin().await?;

    if ProductEntity::find_by_id(product_id).one(&txn).await?.is_none() {
        return Err(StoreError::product_not_found(product_id));
    }

    let existing = CartEntity::find()
        .filter(cart::Column::ProductId.eq(product_id))
        .one(&txn)
        .await?;

    match existing {
        Some(entry) => {
            let current = entry.quantity;
            let mut entry: cart::ActiveModel = entry.into();
            entry.quantity = Set(current.saturating_add(quantity));
            entry.update(&txn).await?;
        }
        None => {
            let new_entry = cart::ActiveModel {
                product_id: Set(product_id),
                quantity: Set(quantity),
                ..Default::default()
            };
            if let Err(err) = CartEntity::insert(new_entry).exec(&txn).await {
                //the unique index on product_id backstops a concurrent first add
                return match err.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => Err(StoreError::Conflict(
                        format!("Product {} was added to the cart concurrently", product_id),
                    )),
                    _ => Err(err.into()),
                };
            }
        }
    }

    let lines = load_cart(&txn).await?;
    txn.commit().await?;
    Ok(lines)
}

/// Absolute quantity update. The quantity-to-zero shortcut belongs to the
/// caller; the store itself only accepts a positive value.
pub async fn set_quantity(
    db: &DatabaseConnection,
    id: i32,
    quantity: u32,
) -> StoreResult<Vec<CartLine>> {
    if quantity < 1 {
        return Err(StoreError::Validation(
            "Quantity should be greater than 0".to_string(),
        ));
    }

    let txn = db.begin().await?;

    let entry = CartEntity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| StoreError::entry_not_found(id))?;

    let mut entry: cart::ActiveModel = entry.into();
    entry.quantity = Set(quantity);
    entry.update(&txn).await?;

    let lines = load_cart(&txn).await?;
    txn.commit().await?;
    Ok(lines)
}

/// Unconditional delete. Removing an id that is already gone is a no-op,
/// so the call is retry-safe.
pub async fn remove_from_cart(db: &DatabaseConnection, id: i32) -> StoreResult<Vec<CartLine>> {
    let txn = db.begin().await?;
    CartEntity::delete_by_id(id).exec(&txn).await?;
    let lines = load_cart(&txn).await?;
    txn.commit().await?;
    Ok(lines)
}
