pub mod app_config;
pub mod memory;
pub mod rates_http;

pub use app_config::Config;
pub use memory::{MemoryStore, StoreError};
pub use rates_http::HttpRateProvider;
