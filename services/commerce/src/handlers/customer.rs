use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::types::{
    CUSTOMER_ADDRESS_MAX_LEN, CUSTOMER_EMAIL_MAX_LEN, CUSTOMER_NAME_MAX_LEN, Customer,
    CustomerFields,
};
use crate::domain::validation::{FieldErrors, FieldReader};
use crate::error::CommerceError;
use crate::handlers::MessageResponse;
use crate::handlers::path::CustomerId;
use crate::handlers::payload::{LoadPayload, Payload};
use crate::state::AppState;
use crate::usecase::customer::{
    CreateCustomerUseCase, DeleteCustomerUseCase, GetCustomerUseCase, ListCustomersUseCase,
    UpdateCustomerUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

impl LoadPayload for CustomerFields {
    fn load(body: &Map<String, Value>) -> Result<Self, FieldErrors> {
        let mut fields = FieldReader::new(body);
        let name = fields.required_string("name", CUSTOMER_NAME_MAX_LEN);
        let email = fields.optional_string("email", CUSTOMER_EMAIL_MAX_LEN);
        let address = fields.optional_string("address", CUSTOMER_ADDRESS_MAX_LEN);
        fields.finish(name.map(|name| Self {
            name,
            email,
            address,
        }))
    }
}

/// Customer with its orders expanded inline as ids.
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub orders: Vec<i32>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            address: customer.address,
            orders: customer.order_ids,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CustomerCreatedResponse {
    pub message: &'static str,
    pub customer: CustomerResponse,
}

// ── POST /customers ──────────────────────────────────────────────────────────

pub async fn create_customer(
    State(state): State<AppState>,
    Payload(fields): Payload<CustomerFields>,
) -> Result<(StatusCode, Json<CustomerCreatedResponse>), CommerceError> {
    let usecase = CreateCustomerUseCase {
        repo: state.customer_repo(),
    };
    let customer = usecase.execute(fields).await?;
    Ok((
        StatusCode::CREATED,
        Json(CustomerCreatedResponse {
            message: "new customer added successfully",
            customer: customer.into(),
        }),
    ))
}

// ── GET /customers ───────────────────────────────────────────────────────────

pub async fn get_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerResponse>>, CommerceError> {
    let usecase = ListCustomersUseCase {
        repo: state.customer_repo(),
    };
    let customers = usecase.execute().await?;
    Ok(Json(customers.into_iter().map(Into::into).collect()))
}

// ── GET /customers/{id} ──────────────────────────────────────────────────────

pub async fn get_customer(
    State(state): State<AppState>,
    CustomerId(id): CustomerId,
) -> Result<Json<CustomerResponse>, CommerceError> {
    let usecase = GetCustomerUseCase {
        repo: state.customer_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── PUT /customers/{id} ──────────────────────────────────────────────────────

pub async fn update_customer(
    State(state): State<AppState>,
    CustomerId(id): CustomerId,
    payload: Result<Payload<CustomerFields>, CommerceError>,
) -> Result<Json<CustomerResponse>, CommerceError> {
    let usecase = UpdateCustomerUseCase {
        repo: state.customer_repo(),
    };
    let fields = payload.map(|Payload(fields)| fields);
    Ok(Json(usecase.execute(id, fields).await?.into()))
}

// ── DELETE /customers/{id} ───────────────────────────────────────────────────

pub async fn delete_customer(
    State(state): State<AppState>,
    CustomerId(id): CustomerId,
) -> Result<Json<MessageResponse>, CommerceError> {
    let usecase = DeleteCustomerUseCase {
        repo: state.customer_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse {
        message: format!("successfully deleted customer {id}"),
    }))
}
