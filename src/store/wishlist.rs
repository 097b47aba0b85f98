//! Wishlist store: set semantics over product ids. The raw toggle flips
//! membership and reports which way it went; the ensure pair gives callers
//! an idempotent form that cannot flip the wrong way.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
    TransactionTrait,
};
use serde::Serialize;

use super::{load_wishlist, WishLine};
use crate::entities::{
    product::Entity as ProductEntity, wishlist, wishlist::Entity as WishlistEntity,
};
use crate::error::{StoreError, StoreResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleAction {
    Added,
    Removed,
}

pub async fn fetch_wishlist(db: &DatabaseConnection) -> StoreResult<Vec<WishLine>> {
    load_wishlist(db).await
}

pub async fn find_entry(db: &DatabaseConnection, id: i32) -> StoreResult<Option<wishlist::Model>> {
    Ok(WishlistEntity::find_by_id(id).one(db).await?)
}

/// Check-then-act flip: delete when present, insert when absent. The whole
/// check-then-act runs in one transaction and the unique index on product_id
/// rejects the losing side of a concurrent double-insert. Retrying a toggle
/// whose outcome was lost flips the state again, so callers must not retry
/// blindly.
pub async fn toggle(
    db: &DatabaseConnection,
    product_id: i32,
) -> StoreResult<(ToggleAction, Vec<WishLine>)> {
    let txn = db.begin().await?;

    if ProductEntity::find_by_id(product_id).one(&txn).await?.is_none() {
        return Err(StoreError::product_not_found(product_id));
    }

    let existing = WishlistEntity::find()
        .filter(wishlist::Column::ProductId.eq(product_id))
        .one(&txn)
        .await?;

    let action = match existing {
        Some(entry) => {
            let entry: wishlist::ActiveModel = entry.into();
            entry.delete(&txn).await?;
            ToggleAction::Removed
        }
        None => {
            let new_entry = wishlist::ActiveModel {
                product_id: Set(product_id),
                created_at: Set(Utc::now()),
                ..Default::default()
            };
            if let Err(err) = WishlistEntity::insert(new_entry).exec(&txn).await {
                return match err.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => Err(StoreError::Conflict(
                        format!("Product {} was toggled concurrently", product_id),
                    )),
                    _ => Err(err.into()),
                };
            }
            ToggleAction::Added
        }
    };

    let lines = load_wishlist(&txn).await?;
    txn.commit().await?;
    Ok((action, lines))
}

/// Idempotent "the product is wishlisted" primitive. A lost insert race is
/// absorbed instead of rejected: the row exists either way.
pub async fn ensure_present(
    db: &DatabaseConnection,
    product_id: i32,
) -> StoreResult<Vec<WishLine>> {
    let txn = db.begin().await?;

    if ProductEntity::find_by_id(product_id).one(&txn).await?.is_none() {
        return Err(StoreError::product_not_found(product_id));
    }

    let existing = WishlistEntity::find()
        .filter(wishlist::Column::ProductId.eq(product_id))
        .one(&txn)
        .await?;

    if existing.is_none() {
        let new_entry = wishlist::ActiveModel {
            product_id: Set(product_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        if let Err(err) = WishlistEntity::insert(new_entry).exec(&txn).await {
            match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {}
                _ => return Err(err.into()),
            }
        }
    }

    let lines = load_wishlist(&txn).await?;
    txn.commit().await?;
    Ok(lines)
}

/// Idempotent "the product is not wishlisted" primitive.
pub async fn ensure_absent(
    db: &DatabaseConnection,
    product_id: i32,
) -> StoreResult<Vec<WishLine>> {
    let txn = db.begin().await?;
    WishlistEntity::delete_many()
        .filter(wishlist::Column::ProductId.eq(product_id))
        .exec(&txn)
        .await?;
    let lines = load_wishlist(&txn).await?;
    txn.commit().await?;
    Ok(lines)
}

/// Unconditional delete by row id, a no-op when the row is already gone.
pub async fn remove_by_id(db: &DatabaseConnection, id: i32) -> StoreResult<Vec<WishLine>> {
    let txn = db.begin().await?;
    WishlistEntity::delete_by_id(id).exec(&txn).await?;
    let lines = load_wishlist(&txn).await?;
    txn.commit().await?;
    Ok(lines)
}
