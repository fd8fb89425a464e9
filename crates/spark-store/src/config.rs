//! # Widget Configuration
//!
//! Configuration loaded once when the widget host starts.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SPARK_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

use spark_core::{Money, PricingPolicy};

/// Widget configuration.
///
/// Defaults reproduce the original storefront page: key `"cart"`, rupee
/// symbol with two decimals, fixed demo price of 80.00.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartConfig {
    /// Storage key the snapshot lives under.
    /// Default: "cart" (single fixed key, whole-snapshot overwrite)
    pub storage_key: String,

    /// Store name (kiosk banner, checkout logging).
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// How scanned products get their unit price.
    pub pricing: PricingPolicy,
}

impl Default for CartConfig {
    fn default() -> Self {
        CartConfig {
            storage_key: "cart".to_string(),
            store_name: "Spark Fireworks Dev Store".to_string(),
            currency_symbol: "₹".to_string(),
            currency_decimals: 2,
            pricing: PricingPolicy::default(),
        }
    }
}

impl CartConfig {
    /// Creates a CartConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SPARK_STORAGE_KEY`: Override the storage key
    /// - `SPARK_STORE_NAME`: Override the store name
    /// - `SPARK_DEMO_PRICE_CENTS`: Override the demo price (minor units)
    pub fn from_env() -> Self {
        let mut config = CartConfig::default();

        if let Ok(storage_key) = std::env::var("SPARK_STORAGE_KEY") {
            config.storage_key = storage_key;
        }

        if let Ok(store_name) = std::env::var("SPARK_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(price_str) = std::env::var("SPARK_DEMO_PRICE_CENTS") {
            if let Ok(cents) = price_str.parse::<i64>() {
                config.pricing = PricingPolicy::FixedDemo(Money::from_cents(cents));
            }
        }

        config
    }

    /// Formats a money amount in the fixed display format.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = CartConfig::default();
    /// assert_eq!(config.format_price(Money::from_cents(8000)), "₹80.00");
    /// ```
    pub fn format_price(&self, amount: Money) -> String {
        let cents = amount.cents();
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_storefront() {
        let config = CartConfig::default();
        assert_eq!(config.storage_key, "cart");
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.pricing.unit_price(), Money::from_cents(8000));
    }

    #[test]
    fn test_format_price_positive() {
        let config = CartConfig::default();
        assert_eq!(config.format_price(Money::from_cents(8000)), "₹80.00");
        assert_eq!(config.format_price(Money::from_cents(100)), "₹1.00");
        assert_eq!(config.format_price(Money::from_cents(1)), "₹0.01");
        assert_eq!(config.format_price(Money::zero()), "₹0.00");
    }

    #[test]
    fn test_format_price_negative() {
        let config = CartConfig::default();
        assert_eq!(config.format_price(Money::from_cents(-1234)), "-₹12.34");
    }

    #[test]
    fn test_format_price_zero_decimals() {
        let config = CartConfig {
            currency_decimals: 0,
            ..CartConfig::default()
        };
        assert_eq!(config.format_price(Money::from_cents(80)), "₹80");
    }
}
