use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

use crate::core::{BillingError, Result};
use crate::modules::taxes::TaxRate;

const KNOWN_ENVIRONMENTS: [&str; 4] = ["development", "test", "staging", "production"];

const DEFAULT_PST_RATE: TaxRate = TaxRate::from_bps(700);
const DEFAULT_GST_RATE: TaxRate = TaxRate::from_bps(500);
const DEFAULT_SALES_TAX_RATE: TaxRate = TaxRate::from_bps(1200);

/// Settings a hosting application may load from its environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingConfig {
    pub app: AppConfig,
    pub taxes: TaxDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(BillingError::configuration(format!("Invalid LOG_FORMAT: {}", s))),
        }
    }
}

/// Default rates handed to invoice and quote constructors
///
/// Business defaults only; callers may still pass any valid rate directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxDefaults {
    pub provincial_sales_tax_rate: TaxRate,
    pub goods_and_services_tax_rate: TaxRate,
    pub sales_tax_rate: TaxRate,
}

impl Default for TaxDefaults {
    fn default() -> Self {
        Self {
            provincial_sales_tax_rate: DEFAULT_PST_RATE,
            goods_and_services_tax_rate: DEFAULT_GST_RATE,
            sales_tax_rate: DEFAULT_SALES_TAX_RATE,
        }
    }
}

impl BillingConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup, applying defaults for missing keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = TaxDefaults::default();

        let config = BillingConfig {
            app: AppConfig {
                env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
                log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                log_format: match lookup("LOG_FORMAT") {
                    Some(value) => value.parse()?,
                    None => LogFormat::default(),
                },
            },
            taxes: TaxDefaults {
                provincial_sales_tax_rate: rate_from(
                    &lookup,
                    "DEFAULT_PST_RATE",
                    defaults.provincial_sales_tax_rate,
                )?,
                goods_and_services_tax_rate: rate_from(
                    &lookup,
                    "DEFAULT_GST_RATE",
                    defaults.goods_and_services_tax_rate,
                )?,
                sales_tax_rate: rate_from(
                    &lookup,
                    "DEFAULT_SALES_TAX_RATE",
                    defaults.sales_tax_rate,
                )?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !KNOWN_ENVIRONMENTS.contains(&self.app.env.as_str()) {
            return Err(BillingError::configuration(format!(
                "APP_ENV must be one of {:?}, got {}",
                KNOWN_ENVIRONMENTS, self.app.env
            )));
        }

        if LevelFilter::from_str(&self.app.log_level).is_err() {
            return Err(BillingError::configuration(format!(
                "Invalid LOG_LEVEL: {}",
                self.app.log_level
            )));
        }

        Ok(())
    }
}

fn rate_from<F>(lookup: &F, key: &str, default: TaxRate) -> Result<TaxRate>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    let rate = Decimal::from_str(raw.trim())
        .map_err(|_| BillingError::configuration(format!("Invalid {}: {}", key, raw)))?;

    TaxRate::new(rate)
        .map_err(|_| BillingError::configuration(format!("{} must be between 0 and 1, got {}", key, raw)))
}
