use crate::domain::repository::CustomerRepository;
use crate::domain::types::{Customer, CustomerFields};
use crate::error::CommerceError;

// ── CreateCustomer ───────────────────────────────────────────────────────────

pub struct CreateCustomerUseCase<R: CustomerRepository> {
    pub repo: R,
}

impl<R: CustomerRepository> CreateCustomerUseCase<R> {
    pub async fn execute(&self, fields: CustomerFields) -> Result<Customer, CommerceError> {
        self.repo.create(&fields).await
    }
}

// ── ListCustomers ────────────────────────────────────────────────────────────

pub struct ListCustomersUseCase<R: CustomerRepository> {
    pub repo: R,
}

impl<R: CustomerRepository> ListCustomersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Customer>, CommerceError> {
        self.repo.list().await
    }
}

// ── GetCustomer ──────────────────────────────────────────────────────────────

pub struct GetCustomerUseCase<R: CustomerRepository> {
    pub repo: R,
}

impl<R: CustomerRepository> GetCustomerUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Customer, CommerceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CommerceError::CustomerNotFound)
    }
}

// ── UpdateCustomer ───────────────────────────────────────────────────────────

pub struct UpdateCustomerUseCase<R: CustomerRepository> {
    pub repo: R,
}

impl<R: CustomerRepository> UpdateCustomerUseCase<R> {
    /// `fields` is the outcome of body validation. A missing customer wins over a bad body.
    pub async fn execute(
        &self,
        id: i32,
        fields: Result<CustomerFields, CommerceError>,
    ) -> Result<Customer, CommerceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(CommerceError::CustomerNotFound);
        }
        let fields = fields?;
        self.repo
            .update(id, &fields)
            .await?
            .ok_or(CommerceError::CustomerNotFound)
    }
}

// ── DeleteCustomer ───────────────────────────────────────────────────────────

pub struct DeleteCustomerUseCase<R: CustomerRepository> {
    pub repo: R,
}

impl<R: CustomerRepository> DeleteCustomerUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), CommerceError> {
        if !self.repo.delete(id).await? {
            return Err(CommerceError::CustomerNotFound);
        }
        tracing::info!(customer_id = id, "customer deleted");
        Ok(())
    }
}
