use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::CommerceError;

/// Reads the path segments as strings and parses each id separately.
/// A segment that is not an `i32` names no row, so it rejects as that resource's 404.
async fn segments<S: Send + Sync>(
    parts: &mut Parts,
    state: &S,
) -> Result<Vec<(String, String)>, CommerceError> {
    Path::<Vec<(String, String)>>::from_request_parts(parts, state)
        .await
        .map(|Path(segments)| segments)
        .map_err(|rejection| {
            CommerceError::Internal(anyhow::anyhow!(
                "unreadable path parameters: {}",
                rejection.body_text()
            ))
        })
}

fn parse_id(
    segments: &[(String, String)],
    key: &str,
    not_found: CommerceError,
) -> Result<i32, CommerceError> {
    segments
        .iter()
        .find(|(name, _)| name == key)
        .and_then(|(_, value)| value.parse().ok())
        .ok_or(not_found)
}

/// `{id}` on `/customers/...`.
#[derive(Debug, Clone, Copy)]
pub struct CustomerId(pub i32);

impl<S: Send + Sync> FromRequestParts<S> for CustomerId {
    type Rejection = CommerceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let segments = segments(parts, state).await?;
        parse_id(&segments, "id", CommerceError::CustomerNotFound).map(Self)
    }
}

/// `{user_id}` on `/orders/users/...`.
#[derive(Debug, Clone, Copy)]
pub struct OrderCustomerId(pub i32);

impl<S: Send + Sync> FromRequestParts<S> for OrderCustomerId {
    type Rejection = CommerceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let segments = segments(parts, state).await?;
        parse_id(&segments, "user_id", CommerceError::CustomerNotFound).map(Self)
    }
}

/// `{id}` on `/products/...`.
#[derive(Debug, Clone, Copy)]
pub struct ProductId(pub i32);

impl<S: Send + Sync> FromRequestParts<S> for ProductId {
    type Rejection = CommerceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let segments = segments(parts, state).await?;
        parse_id(&segments, "id", CommerceError::ProductNotFound).map(Self)
    }
}

/// `{order_id}` on `/orders/...`.
#[derive(Debug, Clone, Copy)]
pub struct OrderId(pub i32);

impl<S: Send + Sync> FromRequestParts<S> for OrderId {
    type Rejection = CommerceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let segments = segments(parts, state).await?;
        parse_id(&segments, "order_id", CommerceError::OrderNotFound).map(Self)
    }
}

/// `{order_id}` and `{product_id}` on `/orders/{order_id}/add_product/{product_id}`.
#[derive(Debug, Clone, Copy)]
pub struct OrderProductIds {
    pub order_id: i32,
    pub product_id: i32,
}

impl<S: Send + Sync> FromRequestParts<S> for OrderProductIds {
    type Rejection = CommerceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let segments = segments(parts, state).await?;
        Ok(Self {
            order_id: parse_id(&segments, "order_id", CommerceError::OrderNotFound)?,
            product_id: parse_id(&segments, "product_id", CommerceError::ProductNotFound)?,
        })
    }
}
