use crate::domain::repository::ProductRepository;
use crate::domain::types::{Product, ProductFields};
use crate::error::CommerceError;

// ── CreateProduct ────────────────────────────────────────────────────────────

pub struct CreateProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> CreateProductUseCase<R> {
    pub async fn execute(&self, fields: ProductFields) -> Result<Product, CommerceError> {
        self.repo.create(&fields).await
    }
}

// ── ListProducts ─────────────────────────────────────────────────────────────

pub struct ListProductsUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> ListProductsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Product>, CommerceError> {
        self.repo.list().await
    }
}

// ── GetProduct ───────────────────────────────────────────────────────────────

pub struct GetProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> GetProductUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Product, CommerceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CommerceError::ProductNotFound)
    }
}

// ── UpdateProduct ────────────────────────────────────────────────────────────

pub struct UpdateProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> UpdateProductUseCase<R> {
    /// A missing product is reported before any body validation error.
    pub async fn execute(
        &self,
        id: i32,
        fields: Result<ProductFields, CommerceError>,
    ) -> Result<Product, CommerceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(CommerceError::ProductNotFound);
        }
        let fields = fields?;
        self.repo
            .update(id, &fields)
            .await?
            .ok_or(CommerceError::ProductNotFound)
    }
}

// ── DeleteProduct ────────────────────────────────────────────────────────────

pub struct DeleteProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> DeleteProductUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), CommerceError> {
        if !self.repo.delete(id).await? {
            return Err(CommerceError::ProductNotFound);
        }
        tracing::info!(product_id = id, "product deleted");
        Ok(())
    }
}
