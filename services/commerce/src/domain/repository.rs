#![allow(async_fn_in_trait)]

use crate::domain::types::{Customer, CustomerFields, Order, OrderFields, Product, ProductFields};
use crate::error::CommerceError;

/// Repository for customers. Reads include the ids of the customer's orders.
pub trait CustomerRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Customer>, CommerceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, CommerceError>;
    async fn create(&self, fields: &CustomerFields) -> Result<Customer, CommerceError>;

    /// Overwrite every mutable field. Returns `None` if the customer does not exist.
    async fn update(
        &self,
        id: i32,
        fields: &CustomerFields,
    ) -> Result<Option<Customer>, CommerceError>;

    /// Delete a customer and, by cascade, their orders. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, CommerceError>;
}

/// Repository for products.
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, CommerceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, CommerceError>;
    async fn create(&self, fields: &ProductFields) -> Result<Product, CommerceError>;

    /// Overwrite every mutable field. Returns `None` if the product does not exist.
    async fn update(
        &self,
        id: i32,
        fields: &ProductFields,
    ) -> Result<Option<Product>, CommerceError>;

    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, CommerceError>;
}

/// Repository for orders and their product associations.
pub trait OrderRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Order>, CommerceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, CommerceError>;

    /// Fails with `CustomerNotFound` if `customer_id` does not reference a customer.
    async fn create(&self, fields: &OrderFields) -> Result<Order, CommerceError>;

    /// Returns `None` if the order does not exist.
    async fn update(&self, id: i32, fields: &OrderFields)
    -> Result<Option<Order>, CommerceError>;

    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, CommerceError>;

    async fn list_by_customer(&self, customer_id: i32) -> Result<Vec<Order>, CommerceError>;
    async fn list_products(&self, order_id: i32) -> Result<Vec<Product>, CommerceError>;

    /// Link a product to an order. Returns `false` if the pair was already linked.
    async fn add_product(&self, order_id: i32, product_id: i32) -> Result<bool, CommerceError>;

    /// Unlink a product from an order. Returns `true` if a link was removed.
    async fn remove_product(&self, order_id: i32, product_id: i32)
    -> Result<bool, CommerceError>;
}
