pub mod contact;
pub mod pii;
pub mod policy;
pub mod rates;

pub use contact::{ContactInfo, ValidationError};
pub use pii::Redacted;
pub use rates::{Rate, RateError, RateProvider};

/// Error type surfaced by repository implementations. The engine does not
/// prescribe a storage backend, so repositories report failures as boxed
/// errors and callers wrap them in their own `Storage` variants.
pub type StorageError = Box<dyn std::error::Error + Send + Sync>;
