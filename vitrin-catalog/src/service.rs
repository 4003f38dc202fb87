use crate::repository::ProductRepository;
use crate::stock::{self, StockError};
use std::sync::Arc;
use uuid::Uuid;
use vitrin_core::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Stock(#[from] StockError),

    #[error("storage error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for CatalogError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

/// Stock mutations against the persistence store. Each movement is written
/// back immediately, so readers never observe a decremented stock count
/// without the matching activation flag.
pub struct CatalogService {
    products: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn reserve_stock(&self, product_id: Uuid, quantity: u32) -> Result<(), CatalogError> {
        let mut product = self
            .products
            .get_product(product_id)
            .await?
            .ok_or_else(|| StockError::ProductNotFound(product_id.to_string()))?;

        stock::reserve(&mut product, quantity)?;
        self.products.update_product(&product).await?;

        tracing::info!(
            product = %product.slug,
            quantity,
            remaining = product.stock,
            "stock reserved"
        );
        Ok(())
    }

    pub async fn release_stock(&self, product_id: Uuid, quantity: u32) -> Result<(), CatalogError> {
        let mut product = self
            .products
            .get_product(product_id)
            .await?
            .ok_or_else(|| StockError::ProductNotFound(product_id.to_string()))?;

        stock::release(&mut product, quantity);
        self.products.update_product(&product).await?;

        tracing::info!(
            product = %product.slug,
            quantity,
            remaining = product.stock,
            "stock released"
        );
        Ok(())
    }
}
