use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub business_rules: BusinessRules,
    pub rates: RatesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    /// Flat referral commission, in whole percent, applied once at placement.
    #[serde(default = "default_commission_percent")]
    pub commission_percent: i64,
}

fn default_commission_percent() -> i64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct RatesConfig {
    pub endpoint: String,
    #[serde(default = "default_rate_timeout")]
    pub timeout_seconds: u64,
}

fn default_rate_timeout() -> u64 {
    5
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Base settings, then the RUN_MODE overlay, then an uncommitted
            // local file, then VITRIN__* environment variables.
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("VITRIN").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_optional_fields() {
        let config: Config = config::Config::builder()
            .set_default("business_rules.commission_percent", 10)
            .unwrap()
            .set_default("rates.endpoint", "http://localhost/rates")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.business_rules.commission_percent, 10);
        assert_eq!(config.rates.timeout_seconds, 5);
    }
}
