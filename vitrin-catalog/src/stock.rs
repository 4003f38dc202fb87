use crate::product::Product;
use chrono::Utc;

#[derive(Debug, thiserror::Error)]
pub enum StockError {
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    #[error("product not found: {0}")]
    ProductNotFound(String),
}

/// Take `quantity` units out of stock. Deactivates the product when the last
/// unit is taken so storefront queries stop listing it.
pub fn reserve(product: &mut Product, quantity: u32) -> Result<(), StockError> {
    if quantity > product.stock {
        return Err(StockError::InsufficientStock {
            requested: quantity,
            available: product.stock,
        });
    }

    product.stock -= quantity;
    if product.stock == 0 {
        product.is_active = false;
    }
    product.updated_at = Utc::now();
    Ok(())
}

/// Return `quantity` units to stock, reactivating the product. Used when an
/// order is canceled.
pub fn release(product: &mut Product, quantity: u32) {
    product.stock += quantity;
    if product.stock > 0 {
        product.is_active = true;
    }
    product.updated_at = Utc::now();
}
