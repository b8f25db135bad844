use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{create_customer, create_order, create_product, test_server};

#[tokio::test]
async fn should_create_product_and_return_201() {
    let server = test_server().await;

    let res = server
        .post("/products")
        .json(&json!({ "product_name": "lamp", "price": 19.5 }))
        .await;

    res.assert_status(StatusCode::CREATED);
    let body: Value = res.json();
    assert_eq!(body["message"], "new product added successfully");
    assert_eq!(body["product"]["product_name"], "lamp");
    assert_eq!(body["product"]["price"], 19.5);
}

#[tokio::test]
async fn should_reject_product_with_bad_price() {
    let server = test_server().await;

    let res = server
        .post("/products")
        .json(&json!({ "product_name": "lamp", "price": "free" }))
        .await;

    res.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        res.json::<Value>()["fields"]["price"],
        json!(["Not a valid number."])
    );
}

#[tokio::test]
async fn should_list_and_get_products() {
    let server = test_server().await;
    let lamp = create_product(&server, "lamp", 19.5).await;
    create_product(&server, "desk", 120.0).await;

    let list: Vec<Value> = server.get("/products").await.json();
    assert_eq!(list.len(), 2);

    let res = server.get(&format!("/products/{lamp}")).await;
    res.assert_status_ok();
    assert_eq!(res.json::<Value>()["product_name"], "lamp");

    server
        .get("/products/999")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_update_product() {
    let server = test_server().await;
    let lamp = create_product(&server, "lamp", 19.5).await;

    let res = server
        .put(&format!("/products/{lamp}"))
        .json(&json!({ "product_name": "floor lamp", "price": 45 }))
        .await;

    res.assert_status_ok();
    let body: Value = res.json();
    assert_eq!(body["product_name"], "floor lamp");
    assert_eq!(body["price"], 45.0);
}

#[tokio::test]
async fn should_return_404_when_updating_unknown_product() {
    let server = test_server().await;

    let res = server
        .put("/products/5")
        .json(&json!({ "product_name": "ghost", "price": 1 }))
        .await;

    res.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>()["kind"], "PRODUCT_NOT_FOUND");
}

#[tokio::test]
async fn should_prefer_404_over_invalid_body_on_update() {
    let server = test_server().await;

    let res = server
        .put("/products/5")
        .json(&json!({ "product_name": "ghost" }))
        .await;

    res.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>()["kind"], "PRODUCT_NOT_FOUND");
}

#[tokio::test]
async fn should_return_json_404_for_non_integer_product_id() {
    let server = test_server().await;

    let res = server.delete("/products/lamp").await;

    res.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>()["kind"], "PRODUCT_NOT_FOUND");
}

#[tokio::test]
async fn should_delete_product_and_detach_it_from_orders() {
    let server = test_server().await;
    let customer = create_customer(&server, "ada").await;
    let order = create_order(&server, customer, "2024-01-02").await;
    let lamp = create_product(&server, "lamp", 19.5).await;
    server
        .put(&format!("/orders/{order}/add_product/{lamp}"))
        .await
        .assert_status_ok();

    let res = server.delete(&format!("/products/{lamp}")).await;

    res.assert_status_ok();
    assert_eq!(
        res.json::<Value>()["message"],
        format!("successfully deleted product {lamp}")
    );
    server
        .get(&format!("/orders/{order}/products"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
