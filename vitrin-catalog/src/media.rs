use std::path::PathBuf;

/// Build the storage path for a product image. Pure: takes the fields it
/// needs instead of reaching into a live record, so the storage layer can
/// call it for both primary and gallery images.
pub fn upload_path(product_name: &str, filename: &str) -> PathBuf {
    ["Products", product_name, filename].iter().collect()
}
