use reqwest::StatusCode;
use tokio;

mod common;
use common::{fetch_products, spawn_app};

#[tokio::test]
async fn test_get_products_returns_the_seeded_catalog() {
    let app = spawn_app().await;

    let products = fetch_products(&app).await;

    assert!(!products.is_empty());
    for product in &products {
        assert!(product["id"].is_number());
        assert!(product["name"].is_string());
        assert!(product["price"].is_number());
        assert!(product["image"].is_string());
        assert!(product["description"].is_string());
    }
}

#[tokio::test]
async fn test_products_can_be_filtered_by_name_substring() {
    let app = spawn_app().await;

    // Step 1: Compute the expected matches from the unfiltered list
    let all = fetch_products(&app).await;
    let expected: Vec<&str> = all
        .iter()
        .filter(|p| p["name"].as_str().unwrap_or_default().contains("iPhone"))
        .map(|p| p["name"].as_str().unwrap_or_default())
        .collect();
    assert!(!expected.is_empty());

    // Step 2: Ask the server for the same filter
    let response = app
        .client
        .get(format!("{}/api/products?name=iPhone", app.address))
        .send()
        .await
        .expect("Failed to send filtered products request");

    assert_eq!(response.status(), StatusCode::OK);

    let filtered = response
        .json::<Vec<serde_json::Value>>()
        .await
        .expect("Failed to parse filtered products JSON");
    let got: Vec<&str> = filtered
        .iter()
        .map(|p| p["name"].as_str().unwrap_or_default())
        .collect();

    assert_eq!(got, expected);
}

#[tokio::test]
async fn test_products_can_be_filtered_by_price_range() {
    let app = spawn_app().await;

    let all = fetch_products(&app).await;
    let expected: Vec<i64> = all
        .iter()
        .filter(|p| {
            let price = p["price"].as_f64().unwrap_or_default();
            price >= 300.0 && price <= 700.0
        })
        .map(|p| p["id"].as_i64().unwrap_or_default())
        .collect();
    assert!(!expected.is_empty());

    let response = app
        .client
        .get(format!("{}/api/products?min=300&max=700", app.address))
        .send()
        .await
        .expect("Failed to send price filter request");

    assert_eq!(response.status(), StatusCode::OK);

    let filtered = response
        .json::<Vec<serde_json::Value>>()
        .await
        .expect("Failed to parse filtered products JSON");
    let got: Vec<i64> = filtered
        .iter()
        .map(|p| p["id"].as_i64().unwrap_or_default())
        .collect();

    assert_eq!(got, expected);
}

#[tokio::test]
async fn test_malformed_price_filter_is_rejected_with_a_message() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(format!("{}/api/products?min=abc", app.address))
        .send()
        .await
        .expect("Failed to send filtered products request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse error JSON");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_get_product_by_id() {
    let app = spawn_app().await;

    let all = fetch_products(&app).await;
    let first = &all[0];
    let id = first["id"].as_i64().expect("Product id missing");

    let response = app
        .client
        .get(format!("{}/api/products/{}", app.address, id))
        .send()
        .await
        .expect("Failed to send product request");

    assert_eq!(response.status(), StatusCode::OK);

    let product = response
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse product JSON");
    assert_eq!(product["name"], first["name"]);
    assert_eq!(product["price"], first["price"]);
}

#[tokio::test]
async fn test_get_missing_product_is_a_404() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(format!("{}/api/products/99999", app.address))
        .send()
        .await
        .expect("Failed to send product request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse error JSON");
    assert_eq!(body["message"], "No product with 99999 id was found");
}
