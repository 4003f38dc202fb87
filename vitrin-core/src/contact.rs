use serde::{Deserialize, Serialize};

/// Contact snapshot captured at order time. Orders keep their own copy of
/// these fields, so later edits to a customer record never rewrite the
/// shipping details of an already-placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub full_name: String,
    pub phone: String,
    pub city: String,
    pub address: String,
    pub postal_code: String,
}

/// National mobile format: "09" followed by nine digits.
pub const PHONE_LEN: usize = 11;

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("phone number must match the 09xxxxxxxxx format: {0}")]
    InvalidPhone(String),

    #[error("required field is empty: {0}")]
    MissingField(&'static str),

    #[error("postal code must be between 1 and 20 characters")]
    InvalidPostalCode,
}

impl ContactInfo {
    /// Validate the snapshot before it is allowed anywhere near persistence.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.full_name.trim().is_empty() {
            return Err(ValidationError::MissingField("full_name"));
        }
        if self.city.trim().is_empty() {
            return Err(ValidationError::MissingField("city"));
        }
        if self.address.trim().is_empty() {
            return Err(ValidationError::MissingField("address"));
        }
        if !is_valid_phone(&self.phone) {
            return Err(ValidationError::InvalidPhone(self.phone.clone()));
        }
        if self.postal_code.is_empty() || self.postal_code.len() > 20 {
            return Err(ValidationError::InvalidPostalCode);
        }
        Ok(())
    }
}

pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_LEN
        && phone.starts_with("09")
        && phone.chars().all(|c| c.is_ascii_digit())
}
