//! Pricing configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `FOODIE_TAX_RATE` - tax rate as a decimal fraction (default: 0.08)
//! - `FOODIE_DELIVERY_FEE` - flat delivery fee (default: 5.00)

use std::str::FromStr;

use foodie_core::PricingConfig;
use rust_decimal::Decimal;
use thiserror::Error;

const DEFAULT_TAX_RATE: &str = "0.08";
const DEFAULT_DELIVERY_FEE: &str = "5.00";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// Load the pricing configuration from the environment.
///
/// # Errors
///
/// Returns [`ConfigError`] if a variable is set but not a valid decimal.
pub fn load_pricing() -> Result<PricingConfig, ConfigError> {
    dotenvy::dotenv().ok();

    Ok(PricingConfig {
        tax_rate: decimal_var("FOODIE_TAX_RATE", DEFAULT_TAX_RATE)?,
        flat_delivery_fee: decimal_var("FOODIE_DELIVERY_FEE", DEFAULT_DELIVERY_FEE)?,
    })
}

fn decimal_var(name: &'static str, default: &str) -> Result<Decimal, ConfigError> {
    let raw = std::env::var(name).unwrap_or_else(|_| default.to_owned());
    Decimal::from_str(&raw).map_err(|e| ConfigError::InvalidEnvVar(name, e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        assert_eq!(
            Decimal::from_str(DEFAULT_TAX_RATE).unwrap(),
            Decimal::new(8, 2)
        );
        assert_eq!(
            Decimal::from_str(DEFAULT_DELIVERY_FEE).unwrap(),
            Decimal::new(500, 2)
        );
    }
}
