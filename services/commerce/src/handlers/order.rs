use axum::{Json, extract::State, http::StatusCode};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::types::{Order, OrderFields};
use crate::domain::validation::{FieldErrors, FieldReader};
use crate::error::CommerceError;
use crate::handlers::MessageResponse;
use crate::handlers::path::{OrderCustomerId, OrderId, OrderProductIds};
use crate::handlers::payload::{LoadPayload, Payload};
use crate::handlers::product::ProductResponse;
use crate::state::AppState;
use crate::usecase::order::{
    AddProductToOrderUseCase, CreateOrderUseCase, DeleteOrderUseCase, GetCustomerOrdersUseCase,
    GetOrderProductsUseCase, GetOrderUseCase, ListOrdersUseCase, RemoveProductFromOrderUseCase,
    UpdateOrderUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

impl LoadPayload for OrderFields {
    fn load(body: &Map<String, Value>) -> Result<Self, FieldErrors> {
        let mut fields = FieldReader::new(body);
        let order_date = fields.required_date("order_date");
        let customer_id = fields.required_integer("customer_id");
        fields.finish(
            order_date
                .zip(customer_id)
                .map(|(order_date, customer_id)| Self {
                    order_date,
                    customer_id,
                }),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: i32,
    pub order_date: NaiveDate,
    pub customer_id: i32,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            order_date: order.order_date,
            customer_id: order.customer_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderCreatedResponse {
    pub message: &'static str,
    pub order: OrderResponse,
}

#[derive(Debug, Serialize)]
pub struct ProductAddedResponse {
    pub message: &'static str,
    pub order_id: i32,
    pub product_id: i32,
}

// ── POST /orders ─────────────────────────────────────────────────────────────

pub async fn create_order(
    State(state): State<AppState>,
    Payload(fields): Payload<OrderFields>,
) -> Result<(StatusCode, Json<OrderCreatedResponse>), CommerceError> {
    let usecase = CreateOrderUseCase {
        orders: state.order_repo(),
        customers: state.customer_repo(),
    };
    let order = usecase.execute(fields).await?;
    Ok((
        StatusCode::CREATED,
        Json(OrderCreatedResponse {
            message: "new order added successfully",
            order: order.into(),
        }),
    ))
}

// ── GET /orders ──────────────────────────────────────────────────────────────

pub async fn get_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, CommerceError> {
    let usecase = ListOrdersUseCase {
        orders: state.order_repo(),
    };
    let orders = usecase.execute().await?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

// ── GET /orders/{order_id} ───────────────────────────────────────────────────

pub async fn get_order(
    State(state): State<AppState>,
    OrderId(order_id): OrderId,
) -> Result<Json<OrderResponse>, CommerceError> {
    let usecase = GetOrderUseCase {
        orders: state.order_repo(),
    };
    Ok(Json(usecase.execute(order_id).await?.into()))
}

// ── PUT /orders/{order_id} ───────────────────────────────────────────────────

pub async fn update_order(
    State(state): State<AppState>,
    OrderId(order_id): OrderId,
    payload: Result<Payload<OrderFields>, CommerceError>,
) -> Result<Json<OrderResponse>, CommerceError> {
    let usecase = UpdateOrderUseCase {
        orders: state.order_repo(),
        customers: state.customer_repo(),
    };
    let fields = payload.map(|Payload(fields)| fields);
    Ok(Json(usecase.execute(order_id, fields).await?.into()))
}

// ── DELETE /orders/{order_id} ────────────────────────────────────────────────

pub async fn delete_order(
    State(state): State<AppState>,
    OrderId(order_id): OrderId,
) -> Result<Json<MessageResponse>, CommerceError> {
    let usecase = DeleteOrderUseCase {
        orders: state.order_repo(),
    };
    usecase.execute(order_id).await?;
    Ok(Json(MessageResponse {
        message: format!("successfully deleted order {order_id}"),
    }))
}

// ── PUT /orders/{order_id}/add_product/{product_id} ──────────────────────────

pub async fn add_product_to_order(
    State(state): State<AppState>,
    OrderProductIds {
        order_id,
        product_id,
    }: OrderProductIds,
) -> Result<Json<ProductAddedResponse>, CommerceError> {
    let usecase = AddProductToOrderUseCase {
        orders: state.order_repo(),
        products: state.product_repo(),
    };
    usecase.execute(order_id, product_id).await?;
    Ok(Json(ProductAddedResponse {
        message: "product added to order successfully",
        order_id,
        product_id,
    }))
}

// ── DELETE /orders/{order_id}/add_product/{product_id} ───────────────────────

pub async fn remove_product_from_order(
    State(state): State<AppState>,
    OrderProductIds {
        order_id,
        product_id,
    }: OrderProductIds,
) -> Result<Json<MessageResponse>, CommerceError> {
    let usecase = RemoveProductFromOrderUseCase {
        orders: state.order_repo(),
        products: state.product_repo(),
    };
    usecase.execute(order_id, product_id).await?;
    Ok(Json(MessageResponse {
        message: format!("successfully deleted product {product_id} from order {order_id}"),
    }))
}

// ── GET /orders/users/{user_id} ──────────────────────────────────────────────

pub async fn get_customer_orders(
    State(state): State<AppState>,
    OrderCustomerId(customer_id): OrderCustomerId,
) -> Result<Json<Vec<OrderResponse>>, CommerceError> {
    let usecase = GetCustomerOrdersUseCase {
        orders: state.order_repo(),
    };
    let orders = usecase.execute(customer_id).await?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

// ── GET /orders/{order_id}/products ──────────────────────────────────────────

pub async fn get_order_products(
    State(state): State<AppState>,
    OrderId(order_id): OrderId,
) -> Result<Json<Vec<ProductResponse>>, CommerceError> {
    let usecase = GetOrderProductsUseCase {
        orders: state.order_repo(),
    };
    let products = usecase.execute(order_id).await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}
