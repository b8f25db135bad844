use std::time::Duration;

use axum_test::TestServer;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::{Value, json};

use shopfront_commerce::router::build_router;
use shopfront_commerce::state::AppState;
use shopfront_commerce_migration::{Migrator, MigratorTrait};

// ── Database ─────────────────────────────────────────────────────────────────

/// Fresh in-memory SQLite database with every migration applied.
///
/// Pinned to one connection so every query sees the same in-memory database.
pub async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub async fn test_server() -> TestServer {
    let db = test_db().await;
    TestServer::new(build_router(AppState { db })).unwrap()
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub async fn create_customer(server: &TestServer, name: &str) -> i32 {
    let res = server
        .post("/customers")
        .json(&json!({ "name": name, "email": format!("{name}@example.com") }))
        .await;
    res.assert_status(axum::http::StatusCode::CREATED);
    id_of(&res.json::<Value>()["customer"])
}

pub async fn create_product(server: &TestServer, product_name: &str, price: f64) -> i32 {
    let res = server
        .post("/products")
        .json(&json!({ "product_name": product_name, "price": price }))
        .await;
    res.assert_status(axum::http::StatusCode::CREATED);
    id_of(&res.json::<Value>()["product"])
}

pub async fn create_order(server: &TestServer, customer_id: i32, order_date: &str) -> i32 {
    let res = server
        .post("/orders")
        .json(&json!({ "order_date": order_date, "customer_id": customer_id }))
        .await;
    res.assert_status(axum::http::StatusCode::CREATED);
    id_of(&res.json::<Value>()["order"])
}

fn id_of(value: &Value) -> i32 {
    value["id"].as_i64().unwrap() as i32
}
