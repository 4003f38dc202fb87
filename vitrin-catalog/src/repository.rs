use crate::product::{Category, Product};
use async_trait::async_trait;
use uuid::Uuid;
use vitrin_core::StorageError;

/// Repository trait for product catalog access.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create_product(&self, product: &Product) -> Result<Uuid, StorageError>;

    async fn get_product(&self, id: Uuid) -> Result<Option<Product>, StorageError>;

    async fn list_products(&self, category_id: Option<Uuid>) -> Result<Vec<Product>, StorageError>;

    async fn update_product(&self, product: &Product) -> Result<(), StorageError>;
}

/// Repository trait for category access.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create_category(&self, category: &Category) -> Result<Uuid, StorageError>;

    async fn get_category(&self, id: Uuid) -> Result<Option<Category>, StorageError>;

    async fn list_categories(&self) -> Result<Vec<Category>, StorageError>;
}
