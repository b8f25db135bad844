use crate::domain::repository::{CustomerRepository, OrderRepository, ProductRepository};
use crate::domain::types::{Order, OrderFields, Product};
use crate::error::CommerceError;

// ── CreateOrder ──────────────────────────────────────────────────────────────

pub struct CreateOrderUseCase<O: OrderRepository, C: CustomerRepository> {
    pub orders: O,
    pub customers: C,
}

impl<O: OrderRepository, C: CustomerRepository> CreateOrderUseCase<O, C> {
    pub async fn execute(&self, fields: OrderFields) -> Result<Order, CommerceError> {
        if self.customers.find_by_id(fields.customer_id).await?.is_none() {
            return Err(CommerceError::CustomerNotFound);
        }
        self.orders.create(&fields).await
    }
}

// ── ListOrders ───────────────────────────────────────────────────────────────

pub struct ListOrdersUseCase<O: OrderRepository> {
    pub orders: O,
}

impl<O: OrderRepository> ListOrdersUseCase<O> {
    pub async fn execute(&self) -> Result<Vec<Order>, CommerceError> {
        self.orders.list().await
    }
}

// ── GetOrder ─────────────────────────────────────────────────────────────────

pub struct GetOrderUseCase<O: OrderRepository> {
    pub orders: O,
}

impl<O: OrderRepository> GetOrderUseCase<O> {
    pub async fn execute(&self, id: i32) -> Result<Order, CommerceError> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or(CommerceError::OrderNotFound)
    }
}

// ── UpdateOrder ──────────────────────────────────────────────────────────────

pub struct UpdateOrderUseCase<O: OrderRepository, C: CustomerRepository> {
    pub orders: O,
    pub customers: C,
}

impl<O: OrderRepository, C: CustomerRepository> UpdateOrderUseCase<O, C> {
    /// Checks run in order: the order exists, the body is valid, the customer exists.
    pub async fn execute(
        &self,
        id: i32,
        fields: Result<OrderFields, CommerceError>,
    ) -> Result<Order, CommerceError> {
        if self.orders.find_by_id(id).await?.is_none() {
            return Err(CommerceError::OrderNotFound);
        }
        let fields = fields?;
        if self.customers.find_by_id(fields.customer_id).await?.is_none() {
            return Err(CommerceError::CustomerNotFound);
        }
        self.orders
            .update(id, &fields)
            .await?
            .ok_or(CommerceError::OrderNotFound)
    }
}

// ── DeleteOrder ──────────────────────────────────────────────────────────────

pub struct DeleteOrderUseCase<O: OrderRepository> {
    pub orders: O,
}

impl<O: OrderRepository> DeleteOrderUseCase<O> {
    pub async fn execute(&self, id: i32) -> Result<(), CommerceError> {
        if !self.orders.delete(id).await? {
            return Err(CommerceError::OrderNotFound);
        }
        tracing::info!(order_id = id, "order deleted");
        Ok(())
    }
}

// ── AddProductToOrder ────────────────────────────────────────────────────────

pub struct AddProductToOrderUseCase<O: OrderRepository, P: ProductRepository> {
    pub orders: O,
    pub products: P,
}

impl<O: OrderRepository, P: ProductRepository> AddProductToOrderUseCase<O, P> {
    pub async fn execute(&self, order_id: i32, product_id: i32) -> Result<(), CommerceError> {
        if self.orders.find_by_id(order_id).await?.is_none() {
            return Err(CommerceError::OrderNotFound);
        }
        if self.products.find_by_id(product_id).await?.is_none() {
            return Err(CommerceError::ProductNotFound);
        }
        if !self.orders.add_product(order_id, product_id).await? {
            return Err(CommerceError::ProductAlreadyInOrder);
        }
        tracing::info!(order_id, product_id, "product added to order");
        Ok(())
    }
}

// ── RemoveProductFromOrder ───────────────────────────────────────────────────

pub struct RemoveProductFromOrderUseCase<O: OrderRepository, P: ProductRepository> {
    pub orders: O,
    pub products: P,
}

impl<O: OrderRepository, P: ProductRepository> RemoveProductFromOrderUseCase<O, P> {
    pub async fn execute(&self, order_id: i32, product_id: i32) -> Result<(), CommerceError> {
        if self.orders.find_by_id(order_id).await?.is_none() {
            return Err(CommerceError::OrderNotFound);
        }
        if self.products.find_by_id(product_id).await?.is_none() {
            return Err(CommerceError::ProductNotFound);
        }
        if !self.orders.remove_product(order_id, product_id).await? {
            return Err(CommerceError::ProductNotInOrder);
        }
        tracing::info!(order_id, product_id, "product removed from order");
        Ok(())
    }
}

// ── GetCustomerOrders ────────────────────────────────────────────────────────

pub struct GetCustomerOrdersUseCase<O: OrderRepository> {
    pub orders: O,
}

impl<O: OrderRepository> GetCustomerOrdersUseCase<O> {
    /// An empty result is reported as `NoOrdersForCustomer`, not as an empty list.
    pub async fn execute(&self, customer_id: i32) -> Result<Vec<Order>, CommerceError> {
        let orders = self.orders.list_by_customer(customer_id).await?;
        if orders.is_empty() {
            return Err(CommerceError::NoOrdersForCustomer(customer_id));
        }
        Ok(orders)
    }
}

// ── GetOrderProducts ─────────────────────────────────────────────────────────

pub struct GetOrderProductsUseCase<O: OrderRepository> {
    pub orders: O,
}

impl<O: OrderRepository> GetOrderProductsUseCase<O> {
    /// An empty result is reported as `NoProductsInOrder`, not as an empty list.
    pub async fn execute(&self, order_id: i32) -> Result<Vec<Product>, CommerceError> {
        let products = self.orders.list_products(order_id).await?;
        if products.is_empty() {
            return Err(CommerceError::NoProductsInOrder(order_id));
        }
        Ok(products)
    }
}
