use crate::vendor::{Vendor, VendorProfile};
use async_trait::async_trait;
use uuid::Uuid;
use vitrin_core::StorageError;

/// Repository trait for vendor and profile access. `code` lookups rely on
/// the store's unique constraint over referral codes.
#[async_trait]
pub trait VendorRepository: Send + Sync {
    async fn create_vendor(&self, vendor: &Vendor) -> Result<Uuid, StorageError>;

    async fn get_vendor(&self, id: Uuid) -> Result<Option<Vendor>, StorageError>;

    async fn find_by_code(&self, code: &str) -> Result<Option<Vendor>, StorageError>;

    async fn update_vendor(&self, vendor: &Vendor) -> Result<(), StorageError>;

    /// Replace the stored projection for `profile.vendor_id`.
    async fn upsert_profile(&self, profile: &VendorProfile) -> Result<(), StorageError>;

    async fn get_profile(&self, vendor_id: Uuid) -> Result<Option<VendorProfile>, StorageError>;
}
