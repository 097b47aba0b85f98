pub mod cart;
pub mod product;
pub mod wishlist;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, Schema, Set, TransactionTrait,
};
use std::sync::Arc;

use crate::entities::{
    cart::Entity as Cart, product::Entity as Product, wishlist::Entity as Wishlist,
};

pub async fn connect_database(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    if database_url.contains(":memory:") {
        //sqlite gives every pooled connection its own memory database
        options.max_connections(1).min_connections(1);
    }
    Database::connect(options).await
}

pub async fn setup_schema(db: &DatabaseConnection) {
    let schema = Schema::new(db.get_database_backend());
    let mut create_product_table = schema.create_table_from_entity(Product);
    let mut create_cart_table = schema.create_table_from_entity(Cart);
    let mut create_wishlist_table = schema.create_table_from_entity(Wishlist);
    create_product_table.if_not_exists();
    create_cart_table.if_not_exists();
    create_wishlist_table.if_not_exists();

    db.execute(db.get_database_backend().build(&create_product_table))
        .await
        .expect("Failed to create products schema");
    db.execute(db.get_database_backend().build(&create_cart_table))
        .await
        .expect("Failed to create cart schema");
    db.execute(db.get_database_backend().build(&create_wishlist_table))
        .await
        .expect("Failed to create wishlist schema");
}

pub async fn seed_catalog(db: Arc<DatabaseConnection>) {
    let existing = Product::find()
        .count(&*db)
        .await
        .expect("Failed to count products");
    if existing > 0 {
        return;
    }

    let catalog = [
        (
            "iPhone 15 Pro",
            999.99,
            "/images/iphone-15-pro.jpg",
            "6.1-inch Super Retina XDR display, A17 Pro chip and a titanium frame.",
        ),
        (
            "iPhone 15",
            799.99,
            "/images/iphone-15.jpg",
            "6.1-inch display, Dynamic Island and a 48MP main camera.",
        ),
        (
            "MacBook Air M2",
            1199.0,
            "/images/macbook-air-m2.jpg",
            "Fanless 13.6-inch laptop with the Apple M2 chip and all-day battery.",
        ),
        (
            "MacBook Pro 14",
            1999.0,
            "/images/macbook-pro-14.jpg",
            "14.2-inch Liquid Retina XDR display with the M3 Pro chip.",
        ),
        (
            "iPad Air",
            599.0,
            "/images/ipad-air.jpg",
            "10.9-inch Liquid Retina display with the M1 chip.",
        ),
        (
            "iPad Pro 12.9",
            1099.0,
            "/images/ipad-pro-129.jpg",
            "12.9-inch mini-LED display, M2 chip and Apple Pencil hover.",
        ),
        (
            "Apple Watch Series 9",
            399.0,
            "/images/apple-watch-s9.jpg",
            "Always-on Retina display with the double tap gesture.",
        ),
        (
            "AirPods Pro 2",
            249.0,
            "/images/airpods-pro-2.jpg",
            "Active noise cancellation with adaptive transparency.",
        ),
        (
            "Mac Mini M2",
            599.99,
            "/images/mac-mini-m2.jpg",
            "Compact desktop with the M2 chip, two Thunderbolt 4 ports.",
        ),
        (
            "HomePod Mini",
            99.0,
            "/images/homepod-mini.jpg",
            "Room-filling 360-degree sound in a small smart speaker.",
        ),
    ];

    let models: Vec<product::ActiveModel> = catalog
        .into_iter()
        .map(|(name, price, image, description)| product::ActiveModel {
            name: Set(name.to_string()),
            price: Set(price),
            image: Set(image.to_string()),
            description: Set(description.to_string()),
            ..Default::default()
        })
        .collect();

    let txn = db.begin().await.expect("Failed to open seed transaction");
    Product::insert_many(models)
        .exec(&txn)
        .await
        .expect("Failed to seed the product catalog");
    txn.commit().await.expect("Failed to commit the seed");
}
