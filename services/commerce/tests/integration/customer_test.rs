use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{create_customer, create_order, test_server};

// ── POST /customers ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_customer_and_return_201() {
    let server = test_server().await;

    let res = server
        .post("/customers")
        .json(&json!({ "name": "Ada", "email": "ada@example.com", "address": "1 Engine Way" }))
        .await;

    res.assert_status(StatusCode::CREATED);
    let body: Value = res.json();
    assert_eq!(body["message"], "new customer added successfully");
    assert_eq!(body["customer"]["name"], "Ada");
    assert_eq!(body["customer"]["email"], "ada@example.com");
    assert_eq!(body["customer"]["address"], "1 Engine Way");
    assert_eq!(body["customer"]["orders"], json!([]));
    assert!(body["customer"]["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn should_reject_customer_without_name() {
    let server = test_server().await;

    let res = server
        .post("/customers")
        .json(&json!({ "email": "nobody@example.com" }))
        .await;

    res.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = res.json();
    assert_eq!(body["kind"], "VALIDATION_FAILED");
    assert_eq!(
        body["fields"]["name"],
        json!(["Missing data for required field."])
    );
}

#[tokio::test]
async fn should_reject_overlong_name() {
    let server = test_server().await;

    let res = server
        .post("/customers")
        .json(&json!({ "name": "x".repeat(226) }))
        .await;

    res.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = res.json();
    assert!(body["fields"]["name"].is_array());
}

#[tokio::test]
async fn should_reject_malformed_json_body() {
    let server = test_server().await;

    let res = server
        .post("/customers")
        .content_type("application/json")
        .text("{not json")
        .await;

    res.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = res.json();
    assert_eq!(body["kind"], "VALIDATION_FAILED");
    assert!(body["fields"]["_schema"].is_array());
}

// ── GET /customers ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_customers_with_their_order_ids() {
    let server = test_server().await;
    let ada = create_customer(&server, "ada").await;
    let bob = create_customer(&server, "bob").await;
    let order = create_order(&server, ada, "2024-01-02").await;

    let res = server.get("/customers").await;

    res.assert_status_ok();
    let body: Vec<Value> = res.json();
    assert_eq!(body.len(), 2);
    let ada_json = body.iter().find(|c| c["id"] == ada).unwrap();
    let bob_json = body.iter().find(|c| c["id"] == bob).unwrap();
    assert_eq!(ada_json["orders"], json!([order]));
    assert_eq!(bob_json["orders"], json!([]));
}

// ── GET /customers/{id} ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_get_customer_by_id() {
    let server = test_server().await;
    let id = create_customer(&server, "ada").await;

    let res = server.get(&format!("/customers/{id}")).await;

    res.assert_status_ok();
    let body: Value = res.json();
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "ada");
    assert_eq!(body["address"], Value::Null);
}

#[tokio::test]
async fn should_return_404_for_unknown_customer() {
    let server = test_server().await;

    let res = server.get("/customers/999").await;

    res.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>()["kind"], "CUSTOMER_NOT_FOUND");
}

// ── PUT /customers/{id} ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_replace_customer_fields() {
    let server = test_server().await;
    let id = create_customer(&server, "ada").await;

    let res = server
        .put(&format!("/customers/{id}"))
        .json(&json!({ "name": "Ada Lovelace" }))
        .await;

    res.assert_status_ok();
    let body: Value = res.json();
    assert_eq!(body["name"], "Ada Lovelace");
    assert_eq!(body["email"], Value::Null);

    let fetched: Value = server.get(&format!("/customers/{id}")).await.json();
    assert_eq!(fetched["name"], "Ada Lovelace");
}

#[tokio::test]
async fn should_return_404_when_updating_unknown_customer() {
    let server = test_server().await;

    let res = server
        .put("/customers/42")
        .json(&json!({ "name": "ghost" }))
        .await;

    res.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>()["kind"], "CUSTOMER_NOT_FOUND");
}

#[tokio::test]
async fn should_prefer_404_over_invalid_body_on_update() {
    let server = test_server().await;

    let res = server.put("/customers/5").json(&json!({ "name": 1 })).await;

    res.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>()["kind"], "CUSTOMER_NOT_FOUND");
}

#[tokio::test]
async fn should_reject_invalid_body_for_existing_customer() {
    let server = test_server().await;
    let id = create_customer(&server, "ada").await;

    let res = server
        .put(&format!("/customers/{id}"))
        .json(&json!({ "name": 1 }))
        .await;

    res.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        res.json::<Value>()["fields"]["name"],
        json!(["Not a valid string."])
    );
}

#[tokio::test]
async fn should_return_json_404_for_non_integer_customer_id() {
    let server = test_server().await;

    for path in ["/customers/abc", "/customers/99999999999"] {
        let res = server.get(path).await;
        res.assert_status(StatusCode::NOT_FOUND);
        let body: Value = res.json();
        assert_eq!(body["kind"], "CUSTOMER_NOT_FOUND");
        assert_eq!(body["message"], "customer not found");
    }
}

// ── DELETE /customers/{id} ───────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_customer_and_cascade_to_orders() {
    let server = test_server().await;
    let id = create_customer(&server, "ada").await;
    let order = create_order(&server, id, "2024-01-02").await;

    let res = server.delete(&format!("/customers/{id}")).await;

    res.assert_status_ok();
    assert_eq!(
        res.json::<Value>()["message"],
        format!("successfully deleted customer {id}")
    );
    server
        .get(&format!("/customers/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .get(&format!("/orders/{order}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_404_when_deleting_unknown_customer() {
    let server = test_server().await;

    server
        .delete("/customers/7")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
