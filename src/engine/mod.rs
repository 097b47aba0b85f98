//! Cross-collection rules for a product that can live in the cart, the
//! wishlist, or both. The moves are two-step sequences over independent
//! stores, so they are deliberately not atomic; see `MoveError` for the
//! partial-failure contract.

use sea_orm::DatabaseConnection;

use crate::error::{MoveError, StoreError};
use crate::store::{cart, wishlist, CartLine, WishLine};

/// Where a single product currently sits across the two collections.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ItemState {
    Absent,
    InCartOnly,
    InWishlistOnly,
    InBoth,
}

/// True when some resolved cart line carries the given product. Lines whose
/// product failed to resolve are skipped, and `None` is never a member.
pub fn is_in_cart(lines: &[CartLine], product_id: Option<i32>) -> bool {
    let Some(product_id) = product_id else {
        return false;
    };
    lines
        .iter()
        .any(|line| line.product.as_ref().is_some_and(|p| p.id == product_id))
}

/// Same contract as `is_in_cart`, over the wishlist.
pub fn is_in_wishlist(lines: &[WishLine], product_id: Option<i32>) -> bool {
    let Some(product_id) = product_id else {
        return false;
    };
    lines
        .iter()
        .any(|line| line.product.as_ref().is_some_and(|p| p.id == product_id))
}

pub fn item_state(cart: &[CartLine], wishlist: &[WishLine], product_id: i32) -> ItemState {
    match (
        is_in_cart(cart, Some(product_id)),
        is_in_wishlist(wishlist, Some(product_id)),
    ) {
        (false, false) => ItemState::Absent,
        (true, false) => ItemState::InCartOnly,
        (false, true) => ItemState::InWishlistOnly,
        (true, true) => ItemState::InBoth,
    }
}

/// Both collections as they stand after a move, fresh from the store.
#[derive(Debug)]
pub struct MoveOutcome {
    pub cart: Vec<CartLine>,
    pub wishlist: Vec<WishLine>,
}

/// Take a cart row out of the cart and make sure its product is wishlisted.
/// Built on the idempotent ensure form, so a product that is already on the
/// wishlist stays there instead of being toggled out. If the second step
/// fails the cart removal stays committed and the error says so.
pub async fn move_to_wishlist(
    db: &DatabaseConnection,
    cart_item_id: i32,
) -> Result<MoveOutcome, MoveError> {
    let entry = cart::find_entry(db, cart_item_id)
        .await
        .map_err(MoveError::StepOne)?
        .ok_or_else(|| MoveError::StepOne(StoreError::entry_not_found(cart_item_id)))?;

    let cart_lines = cart::remove_from_cart(db, cart_item_id)
        .await
        .map_err(MoveError::StepOne)?;
    let wishlist_lines = wishlist::ensure_present(db, entry.product_id)
        .await
        .map_err(MoveError::StepTwo)?;

    tracing::debug!(
        product_id = entry.product_id,
        state = ?item_state(&cart_lines, &wishlist_lines, entry.product_id),
        "moved cart entry to wishlist"
    );
    Ok(MoveOutcome {
        cart: cart_lines,
        wishlist: wishlist_lines,
    })
}

/// Take a wishlist row off the wishlist and add its product to the cart with
/// quantity 1. The removal is the idempotent ensure-absent form; the cart add
/// increments the existing row when the product is already in the cart.
pub async fn move_to_cart(
    db: &DatabaseConnection,
    wishlist_item_id: i32,
) -> Result<MoveOutcome, MoveError> {
    let entry = wishlist::find_entry(db, wishlist_item_id)
        .await
        .map_err(MoveError::StepOne)?
        .ok_or_else(|| MoveError::StepOne(StoreError::entry_not_found(wishlist_item_id)))?;

    let wishlist_lines = wishlist::ensure_absent(db, entry.product_id)
        .await
        .map_err(MoveError::StepOne)?;
    let cart_lines = cart::add_to_cart(db, entry.product_id, 1)
        .await
        .map_err(MoveError::StepTwo)?;

    tracing::debug!(
        product_id = entry.product_id,
        state = ?item_state(&cart_lines, &wishlist_lines, entry.product_id),
        "moved wishlist entry to cart"
    );
    Ok(MoveOutcome {
        cart: cart_lines,
        wishlist: wishlist_lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::product;
    use chrono::Utc;

    fn product(id: i32) -> product::Model {
        product::Model {
            id,
            name: format!("Product {}", id),
            price: 9.99,
            image: format!("/images/{}.jpg", id),
            description: "test product".to_string(),
        }
    }

    fn cart_line(id: i32, product_id: i32, quantity: u32) -> CartLine {
        CartLine {
            id,
            product_id,
            quantity,
            product: Some(product(product_id)),
        }
    }

    fn unresolved_cart_line(id: i32, product_id: i32) -> CartLine {
        CartLine {
            id,
            product_id,
            quantity: 1,
            product: None,
        }
    }

    fn wish_line(id: i32, product_id: i32) -> WishLine {
        WishLine {
            id,
            product_id,
            created_at: Utc::now(),
            product: Some(product(product_id)),
        }
    }

    #[test]
    fn membership_is_false_for_missing_argument() {
        let cart = vec![cart_line(1, 10, 2)];
        let wishlist = vec![wish_line(1, 10)];
        assert!(!is_in_cart(&cart, None));
        assert!(!is_in_wishlist(&wishlist, None));
    }

    #[test]
    fn membership_is_false_on_empty_collections() {
        assert!(!is_in_cart(&[], Some(10)));
        assert!(!is_in_wishlist(&[], Some(10)));
    }

    #[test]
    fn membership_matches_resolved_products() {
        let cart = vec![cart_line(1, 10, 2), cart_line(2, 11, 1)];
        assert!(is_in_cart(&cart, Some(10)));
        assert!(is_in_cart(&cart, Some(11)));
        assert!(!is_in_cart(&cart, Some(12)));
    }

    #[test]
    fn membership_skips_lines_that_failed_to_resolve() {
        let cart = vec![unresolved_cart_line(1, 10)];
        assert!(!is_in_cart(&cart, Some(10)));
    }

    #[test]
    fn membership_ignores_unresolved_wishlist_rows() {
        let wishlist = vec![WishLine {
            id: 1,
            product_id: 10,
            created_at: Utc::now(),
            product: None,
        }];
        assert!(!is_in_wishlist(&wishlist, Some(10)));
    }

    #[test]
    fn item_state_covers_all_four_quadrants() {
        let cart = vec![cart_line(1, 10, 1), cart_line(2, 12, 1)];
        let wishlist = vec![wish_line(1, 11), wish_line(2, 12)];

        assert_eq!(item_state(&cart, &wishlist, 13), ItemState::Absent);
        assert_eq!(item_state(&cart, &wishlist, 10), ItemState::InCartOnly);
        assert_eq!(item_state(&cart, &wishlist, 11), ItemState::InWishlistOnly);
        assert_eq!(item_state(&cart, &wishlist, 12), ItemState::InBoth);
    }
}
