use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Wrapper for contact fields that keeps the real value for serialization but
/// redacts Debug/Display output, so phone numbers and postal codes do not
/// leak through `tracing::info!("{:?}", ..)`. Values long enough to stay
/// ambiguous keep a four-character tail for support lookups; anything
/// shorter is masked entirely.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Redacted<T>(pub T);

/// Below this length a four-character tail would reveal most of the value.
const MIN_LEN_FOR_TAIL: usize = 8;

impl<T: AsRef<str>> fmt::Debug for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0.as_ref();
        let len = value.chars().count();
        write!(f, "***")?;
        if len >= MIN_LEN_FOR_TAIL {
            for c in value.chars().skip(len - 4) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl<T: AsRef<str>> fmt::Display for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl<T: Serialize> Serialize for Redacted<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // API responses and stored records need the real value; redaction is
        // only for log formatting.
        self.0.serialize(serializer)
    }
}

impl<T> Redacted<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_shows_only_tail() {
        let phone = Redacted("09123456789".to_string());
        assert_eq!(format!("{:?}", phone), "***6789");
    }

    #[test]
    fn test_short_values_fully_masked() {
        assert_eq!(format!("{:?}", Redacted("42".to_string())), "***");
        assert_eq!(format!("{:?}", Redacted("1234567".to_string())), "***");
    }

    #[test]
    fn test_eight_characters_is_the_shortest_tailed_value() {
        assert_eq!(format!("{:?}", Redacted("12345678".to_string())), "***5678");
    }

    #[test]
    fn test_serialize_keeps_real_value() {
        let phone = Redacted("09123456789".to_string());
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"09123456789\"");
    }
}
