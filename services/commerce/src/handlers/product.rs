use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::types::{PRODUCT_NAME_MAX_LEN, Product, ProductFields};
use crate::domain::validation::{FieldErrors, FieldReader};
use crate::error::CommerceError;
use crate::handlers::MessageResponse;
use crate::handlers::path::ProductId;
use crate::handlers::payload::{LoadPayload, Payload};
use crate::state::AppState;
use crate::usecase::product::{
    CreateProductUseCase, DeleteProductUseCase, GetProductUseCase, ListProductsUseCase,
    UpdateProductUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

impl LoadPayload for ProductFields {
    fn load(body: &Map<String, Value>) -> Result<Self, FieldErrors> {
        let mut fields = FieldReader::new(body);
        let product_name = fields.required_string("product_name", PRODUCT_NAME_MAX_LEN);
        let price = fields.required_number("price");
        fields.finish(
            product_name
                .zip(price)
                .map(|(product_name, price)| Self {
                    product_name,
                    price,
                }),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i32,
    pub product_name: String,
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            product_name: product.product_name,
            price: product.price,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductCreatedResponse {
    pub message: &'static str,
    pub product: ProductResponse,
}

// ── POST /products ───────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    Payload(fields): Payload<ProductFields>,
) -> Result<(StatusCode, Json<ProductCreatedResponse>), CommerceError> {
    let usecase = CreateProductUseCase {
        repo: state.product_repo(),
    };
    let product = usecase.execute(fields).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProductCreatedResponse {
            message: "new product added successfully",
            product: product.into(),
        }),
    ))
}

// ── GET /products ────────────────────────────────────────────────────────────

pub async fn get_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, CommerceError> {
    let usecase = ListProductsUseCase {
        repo: state.product_repo(),
    };
    let products = usecase.execute().await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

// ── GET /products/{id} ───────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Json<ProductResponse>, CommerceError> {
    let usecase = GetProductUseCase {
        repo: state.product_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── PUT /products/{id} ───────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    payload: Result<Payload<ProductFields>, CommerceError>,
) -> Result<Json<ProductResponse>, CommerceError> {
    let usecase = UpdateProductUseCase {
        repo: state.product_repo(),
    };
    let fields = payload.map(|Payload(fields)| fields);
    Ok(Json(usecase.execute(id, fields).await?.into()))
}

// ── DELETE /products/{id} ────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Json<MessageResponse>, CommerceError> {
    let usecase = DeleteProductUseCase {
        repo: state.product_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse {
        message: format!("successfully deleted product {id}"),
    }))
}
