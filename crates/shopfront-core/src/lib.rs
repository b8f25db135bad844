//! Shared HTTP and persistence plumbing for Shopfront services.

pub mod health;
pub mod middleware;
pub mod sea_ext;
pub mod tracing;
