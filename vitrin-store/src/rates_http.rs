use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use vitrin_core::{Rate, RateError, RateProvider};

#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

/// Exchange-rate provider backed by the public USD rates endpoint. Every
/// request carries a hard timeout; failures are reported, never retried —
/// the engine only uses the rate for display.
pub struct HttpRateProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRateProvider {
    pub fn new(endpoint: impl Into<String>, timeout_seconds: u64) -> Result<Self, RateError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| RateError::Unavailable(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl RateProvider for HttpRateProvider {
    async fn fetch_rate(&self) -> Result<Rate, RateError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RateError::Timeout
                } else {
                    RateError::Unavailable(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(RateError::Unavailable(format!(
                "upstream returned {}",
                response.status()
            )));
        }

        let body: RatesResponse = response
            .json()
            .await
            .map_err(|e| RateError::Malformed(e.to_string()))?;

        let usd_to_irr = body
            .rates
            .get("IRR")
            .copied()
            .ok_or_else(|| RateError::Malformed("IRR missing from rates table".to_string()))?;

        Ok(Rate {
            usd_to_irr,
            fetched_at: Utc::now(),
        })
    }
}
