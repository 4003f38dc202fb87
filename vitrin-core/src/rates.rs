use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the USD → IRR conversion rate. Display-only: settlement math
/// never depends on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rate {
    pub usd_to_irr: f64,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum RateError {
    #[error("exchange-rate service unavailable: {0}")]
    Unavailable(String),

    #[error("exchange-rate request timed out")]
    Timeout,

    #[error("malformed exchange-rate response: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetch the current conversion rate. Best-effort and timeout-bound;
    /// callers degrade to "rate unknown" on any error.
    async fn fetch_rate(&self) -> Result<Rate, RateError>;
}

/// Fixed-rate provider for tests and offline runs.
pub struct FixedRateProvider {
    pub usd_to_irr: f64,
}

#[async_trait]
impl RateProvider for FixedRateProvider {
    async fn fetch_rate(&self) -> Result<Rate, RateError> {
        Ok(Rate {
            usd_to_irr: self.usd_to_irr,
            fetched_at: Utc::now(),
        })
    }
}

/// Convert an amount in USD minor units for display, swallowing provider
/// failures. Returns `None` when the rate cannot be fetched.
pub async fn price_in_rial(amount: i64, provider: &dyn RateProvider) -> Option<i64> {
    match provider.fetch_rate().await {
        Ok(rate) => Some((amount as f64 * rate.usd_to_irr) as i64),
        Err(err) => {
            tracing::warn!("exchange-rate lookup failed, price shown without conversion: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DownProvider;

    #[async_trait]
    impl RateProvider for DownProvider {
        async fn fetch_rate(&self) -> Result<Rate, RateError> {
            Err(RateError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_price_in_rial_uses_fetched_rate() {
        let provider = FixedRateProvider { usd_to_irr: 50.0 };
        assert_eq!(price_in_rial(1000, &provider).await, Some(50_000));
    }

    #[tokio::test]
    async fn test_provider_failure_degrades_to_none() {
        assert_eq!(price_in_rial(1000, &DownProvider).await, None);
    }
}
