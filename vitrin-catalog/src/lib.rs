pub mod media;
pub mod product;
pub mod repository;
pub mod service;
pub mod stock;

pub use product::{Category, Product};
pub use repository::{CategoryRepository, ProductRepository};
pub use service::{CatalogError, CatalogService};
pub use stock::StockError;
