use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vitrin_core::contact::is_valid_phone;
use vitrin_core::ValidationError;

/// Referral partner. The `code` is handed out to customers and quoted back
/// at order time; it is generated once at onboarding and never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub slug: String,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub address: String,
    pub code: String,
    /// Accrued commission in USD minor units. Only grows, via the ledger.
    pub profit: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vendor {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        city: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let phone = phone.into();
        if !is_valid_phone(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        let id = Uuid::new_v4();
        let now = Utc::now();
        Ok(Self {
            slug: vendor_slug(&first_name, &last_name, &phone),
            code: referral_code(&id),
            id,
            first_name,
            last_name,
            phone,
            email: email.into(),
            city: city.into(),
            address: address.into(),
            profit: 0,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Derive the read-model projection from the current vendor state.
    pub fn profile(&self) -> VendorProfile {
        VendorProfile {
            vendor_id: self.id,
            display_name: self.display_name(),
            code: self.code.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            profit: self.profit,
            synced_at: Utc::now(),
        }
    }
}

/// Denormalized vendor snapshot for fast reads. Rebuilt on every vendor
/// write; never edited on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorProfile {
    pub vendor_id: Uuid,
    pub display_name: String,
    pub code: String,
    pub phone: String,
    pub email: String,
    pub profit: i64,
    pub synced_at: DateTime<Utc>,
}

fn vendor_slug(first_name: &str, last_name: &str, phone: &str) -> String {
    format!("{}-{}-{}", first_name, last_name, phone)
        .to_lowercase()
        .replace(' ', "-")
}

/// Format: VND-{first 8 hex chars of the vendor id}, uppercased.
fn referral_code(id: &Uuid) -> String {
    let hex = id.simple().to_string();
    format!("VND-{}", hex[..8].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_vendor() -> Vendor {
        Vendor::new(
            "Reza",
            "Karimi",
            "09351112233",
            "reza@example.com",
            "Shiraz",
            "4 Zand Blvd",
        )
        .unwrap()
    }

    #[test]
    fn test_code_derived_from_id() {
        let vendor = test_vendor();
        assert!(vendor.code.starts_with("VND-"));
        assert_eq!(vendor.code.len(), 12);
        assert_eq!(
            vendor.code,
            referral_code(&vendor.id),
            "code must be reproducible from the vendor id"
        );
    }

    #[test]
    fn test_new_vendor_starts_with_zero_profit() {
        assert_eq!(test_vendor().profit, 0);
    }

    #[test]
    fn test_invalid_phone_rejected() {
        let result = Vendor::new("Reza", "Karimi", "12345", "r@e.com", "Shiraz", "x");
        assert!(matches!(result, Err(ValidationError::InvalidPhone(_))));
    }

    #[test]
    fn test_profile_mirrors_vendor() {
        let mut vendor = test_vendor();
        vendor.profit = 4200;

        let profile = vendor.profile();
        assert_eq!(profile.vendor_id, vendor.id);
        assert_eq!(profile.display_name, "Reza Karimi");
        assert_eq!(profile.code, vendor.code);
        assert_eq!(profile.profit, 4200);
    }
}
