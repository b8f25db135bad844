//! SeaORM entities for the commerce service.

pub mod customers;
pub mod order_products;
pub mod orders;
pub mod products;
