use crate::repository::VendorRepository;
use crate::vendor::Vendor;
use std::sync::Arc;
use uuid::Uuid;
use vitrin_core::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("no vendor matches referral code: {0}")]
    VendorNotFound(String),

    #[error("vendor record missing: {0}")]
    VendorMissing(Uuid),

    #[error("credit amount must be positive, got {0}")]
    InvalidAmount(i64),

    #[error("storage error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for LedgerError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

/// Vendor profit accrual and referral-code resolution. Every vendor write
/// that goes through here re-syncs the profile projection in the same call,
/// replacing the original's save-signal chain.
pub struct LedgerService {
    vendors: Arc<dyn VendorRepository>,
}

impl LedgerService {
    pub fn new(vendors: Arc<dyn VendorRepository>) -> Self {
        Self { vendors }
    }

    /// Onboard a vendor and materialize its initial profile.
    pub async fn register(&self, vendor: &Vendor) -> Result<Uuid, LedgerError> {
        let id = self.vendors.create_vendor(vendor).await?;
        self.vendors.upsert_profile(&vendor.profile()).await?;
        tracing::info!(vendor = %vendor.slug, code = %vendor.code, "vendor registered");
        Ok(id)
    }

    /// Add `amount` to the vendor's profit balance and persist both the
    /// vendor and the refreshed projection.
    pub async fn credit(&self, vendor_id: Uuid, amount: i64) -> Result<Vendor, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount(amount));
        }

        let mut vendor = self
            .vendors
            .get_vendor(vendor_id)
            .await?
            .ok_or(LedgerError::VendorMissing(vendor_id))?;

        vendor.profit += amount;
        vendor.updated_at = chrono::Utc::now();
        self.vendors.update_vendor(&vendor).await?;
        self.vendors.upsert_profile(&vendor.profile()).await?;

        tracing::info!(
            vendor = %vendor.slug,
            amount,
            balance = vendor.profit,
            "vendor credited"
        );
        Ok(vendor)
    }

    /// Exact-match lookup on the immutable referral code. Used only at order
    /// creation; an unknown code is a hard error for the caller.
    pub async fn resolve_by_code(&self, code: &str) -> Result<Vendor, LedgerError> {
        self.vendors
            .find_by_code(code)
            .await?
            .ok_or_else(|| LedgerError::VendorNotFound(code.to_string()))
    }
}
