use axum::{
    Router,
    routing::{get, put},
};
use tower::ServiceBuilder;

use shopfront_core::health::healthz;
use shopfront_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    customer::{create_customer, delete_customer, get_customer, get_customers, update_customer},
    health::readyz,
    order::{
        add_product_to_order, create_order, delete_order, get_customer_orders, get_order,
        get_order_products, get_orders, remove_product_from_order, update_order,
    },
    product::{create_product, delete_product, get_product, get_products, update_product},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Customers
        .route("/customers", get(get_customers).post(create_customer))
        .route(
            "/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        // Products
        .route("/products", get(get_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        // Orders
        .route("/orders", get(get_orders).post(create_order))
        .route(
            "/orders/{order_id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route("/orders/{order_id}/products", get(get_order_products))
        .route("/orders/users/{user_id}", get(get_customer_orders))
        // Order products
        .route(
            "/orders/{order_id}/add_product/{product_id}",
            put(add_product_to_order).delete(remove_product_from_order),
        )
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(trace_layer())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
