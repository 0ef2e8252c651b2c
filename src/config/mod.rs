//! Store configuration loading and validation.
//!
//! Uses serde_yaml to load the YAML configuration file with support for
//! environment variable overrides for deployment-specific values.

mod error;

pub use error::ConfigError;

use rust_decimal::Decimal;
use serde::Deserialize;
use std::{env, fs};

/// Sentinel left in `backend_url` until the store backend is deployed.
pub const PLACEHOLDER_BACKEND_MARKER: &str = "YOUR-APP-NAME";

/// Front-end configuration for the store.
///
/// Every field carries a built-in default, so a partial config file still
/// produces a fully-populated record. Environment variables override the
/// file values after parsing:
/// - `STORE_BACKEND_URL`, `STORE_DELIVERY_FEE`, `STORE_FREE_DELIVERY_THRESHOLD`
/// - `STORE_NAME`, `STORE_LOCATION`, `STORE_SUPPORT_PHONE`, `STORE_SUPPORT_EMAIL`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Base URL of the store backend. Ships with a placeholder that must be
    /// replaced with the live deployment address.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    /// Flat delivery fee charged per order.
    #[serde(default = "default_delivery_fee")]
    pub delivery_fee: Decimal,
    /// Order total at or above which the delivery fee is waived.
    #[serde(default = "default_free_delivery_threshold")]
    pub free_delivery_threshold: Decimal,
    /// Store display name.
    #[serde(default = "default_store_name")]
    pub store_name: String,
    /// Postal address of the store.
    #[serde(default = "default_store_location")]
    pub store_location: String,
    /// Customer support phone number.
    #[serde(default = "default_support_phone")]
    pub support_phone: String,
    /// Customer support email address.
    #[serde(default = "default_support_email")]
    pub support_email: String,
}

fn default_backend_url() -> String {
    "https://YOUR-APP-NAME.onrender.com".to_string()
}

fn default_delivery_fee() -> Decimal {
    Decimal::from(40)
}

fn default_free_delivery_threshold() -> Decimal {
    Decimal::from(500)
}

fn default_store_name() -> String {
    "Arun Karyana Store".to_string()
}

fn default_store_location() -> String {
    "Railway Road, Barara, Ambala, Haryana 133201".to_string()
}

fn default_support_phone() -> String {
    "+91-XXXXXXXXXX".to_string()
}

fn default_support_email() -> String {
    "support@arunkaryana.com".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AppConfig {
    /// The built-in configuration record, used when no config file exists.
    pub fn builtin() -> Self {
        AppConfig {
            backend_url: default_backend_url(),
            delivery_fee: default_delivery_fee(),
            free_delivery_threshold: default_free_delivery_threshold(),
            store_name: default_store_name(),
            store_location: default_store_location(),
            support_phone: default_support_phone(),
            support_email: default_support_email(),
        }
    }

    /// Load configuration from a YAML file at the given path.
    ///
    /// First loads environment variables from `.env` file (if exists),
    /// then loads the YAML config, applies `STORE_*` environment variable
    /// overrides and validates the result.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore error if not found)
        dotenvy::dotenv().ok();

        let content = fs::read_to_string(path)?;
        let mut config: AppConfig = serde_yaml::from_str(&content)?;

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Override deployment-specific values from environment variables.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(url) = env::var("STORE_BACKEND_URL") {
            self.backend_url = url;
        }
        if let Ok(fee) = env::var("STORE_DELIVERY_FEE") {
            self.delivery_fee = parse_amount("STORE_DELIVERY_FEE", &fee)?;
        }
        if let Ok(threshold) = env::var("STORE_FREE_DELIVERY_THRESHOLD") {
            self.free_delivery_threshold =
                parse_amount("STORE_FREE_DELIVERY_THRESHOLD", &threshold)?;
        }
        if let Ok(name) = env::var("STORE_NAME") {
            self.store_name = name;
        }
        if let Ok(location) = env::var("STORE_LOCATION") {
            self.store_location = location;
        }
        if let Ok(phone) = env::var("STORE_SUPPORT_PHONE") {
            self.support_phone = phone;
        }
        if let Ok(email) = env::var("STORE_SUPPORT_EMAIL") {
            self.support_email = email;
        }
        Ok(())
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.backend_url.is_empty() {
            return Err(ConfigError::Validation("backend_url is required".into()));
        }

        if !self.backend_url.starts_with("http://") && !self.backend_url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "backend_url must start with http:// or https://, got {}",
                self.backend_url
            )));
        }

        if self.delivery_fee < Decimal::ZERO {
            return Err(ConfigError::Validation(
                "delivery_fee must not be negative".into(),
            ));
        }

        if self.free_delivery_threshold < self.delivery_fee {
            return Err(ConfigError::Validation(format!(
                "free_delivery_threshold ({}) must not be below delivery_fee ({})",
                self.free_delivery_threshold, self.delivery_fee
            )));
        }

        if self.store_name.is_empty() {
            return Err(ConfigError::Validation("store_name is required".into()));
        }

        if self.store_location.is_empty() {
            return Err(ConfigError::Validation(
                "store_location is required".into(),
            ));
        }

        if self.support_phone.is_empty() {
            return Err(ConfigError::Validation(
                "support_phone is required".into(),
            ));
        }

        if self.support_email.is_empty() {
            return Err(ConfigError::Validation(
                "support_email is required".into(),
            ));
        }

        Ok(())
    }

    /// Whether `backend_url` still points at the undeployed placeholder.
    pub fn has_placeholder_backend(&self) -> bool {
        self.backend_url.contains(PLACEHOLDER_BACKEND_MARKER)
    }

    /// Deployment-readiness check.
    ///
    /// Fails while the placeholder backend address is still configured, so
    /// an unconfigured build cannot reach production silently.
    pub fn deploy_check(&self) -> Result<(), ConfigError> {
        if self.has_placeholder_backend() {
            return Err(ConfigError::Unconfigured(format!(
                "backend_url still contains the {} placeholder, replace it with the deployed backend address",
                PLACEHOLDER_BACKEND_MARKER
            )));
        }
        Ok(())
    }
}

fn parse_amount(var: &str, value: &str) -> Result<Decimal, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Validation(format!("{} is not a valid amount: {}", var, value)))
}
