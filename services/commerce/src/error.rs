use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::validation::FieldErrors;

/// Commerce service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum CommerceError {
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("customer not found")]
    CustomerNotFound,
    #[error("product not found")]
    ProductNotFound,
    #[error("order not found")]
    OrderNotFound,
    #[error("product is not in the order")]
    ProductNotInOrder,
    #[error("no orders found for customer {0}")]
    NoOrdersForCustomer(i32),
    #[error("no products found in order {0}")]
    NoProductsInOrder(i32),
    #[error("product is already in the order")]
    ProductAlreadyInOrder,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CommerceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::CustomerNotFound => "CUSTOMER_NOT_FOUND",
            Self::ProductNotFound => "PRODUCT_NOT_FOUND",
            Self::OrderNotFound => "ORDER_NOT_FOUND",
            Self::ProductNotInOrder => "PRODUCT_NOT_IN_ORDER",
            Self::NoOrdersForCustomer(_) => "ORDERS_NOT_FOUND",
            Self::NoProductsInOrder(_) => "ORDER_PRODUCTS_NOT_FOUND",
            Self::ProductAlreadyInOrder => "PRODUCT_ALREADY_IN_ORDER",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<FieldErrors> for CommerceError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

impl IntoResponse for CommerceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::CustomerNotFound
            | Self::ProductNotFound
            | Self::OrderNotFound
            | Self::ProductNotInOrder
            | Self::NoOrdersForCustomer(_)
            | Self::NoProductsInOrder(_) => StatusCode::NOT_FOUND,
            Self::ProductAlreadyInOrder => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Only 500s are logged here; the trace layer already records every response status.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %format!("{e:#}"), kind = "INTERNAL", "internal error");
        }
        let mut body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if let Self::Validation(ref fields) = self {
            body["fields"] = serde_json::json!(fields);
        }
        (status, axum::Json(body)).into_response()
    }
}
