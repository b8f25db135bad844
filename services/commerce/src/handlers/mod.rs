use serde::Serialize;

pub mod customer;
pub mod health;
pub mod order;
pub mod path;
pub mod payload;
pub mod product;

/// Plain acknowledgement body for deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
