use anyhow::{anyhow, bail, Result};
use chrono::Datelike;
use std::{env, fmt::Display, str::FromStr};
use tracing::info;
use yearbook_core::{Currency, CurrencySettings, EmailSettings, DEFAULT_EXCHANGE_RATE};

/// Switches for subsystems that are turned off during development
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureToggles {
    pub email_delivery: bool,
    pub email_verification: bool,
}

/// Everything the front-end needs, read once at start-up and passed down explicitly
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub currency: CurrencySettings,
    pub current_year: i32,
    pub features: FeatureToggles,
    pub email: EmailSettings,
    pub base_url: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup (the environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let currency: Currency = try_load(&lookup, "YEARBOOK_CURRENCY", "USD")?;
        let exchange_rate: f64 = try_load(
            &lookup,
            "YEARBOOK_EXCHANGE_RATE",
            &DEFAULT_EXCHANGE_RATE.to_string(),
        )?;
        if !exchange_rate.is_finite() || exchange_rate <= 0.0 {
            bail!("Invalid YEARBOOK_EXCHANGE_RATE value: {exchange_rate} (must be positive)");
        }

        let current_year = match lookup("YEARBOOK_CURRENT_YEAR") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| anyhow!("Invalid YEARBOOK_CURRENT_YEAR value '{raw}': {e}"))?,
            None => chrono::Local::now().year(),
        };

        let features = FeatureToggles {
            email_delivery: load_flag(&lookup, "YEARBOOK_EMAIL_ENABLED")?,
            email_verification: load_flag(&lookup, "YEARBOOK_EMAIL_VERIFICATION")?,
        };

        let email = EmailSettings {
            enabled: features.email_delivery,
            api_key: load_secret(&lookup, "RESEND_API_KEY"),
            from_email: load_secret(&lookup, "RESEND_FROM_EMAIL"),
        };

        let base_url = lookup("YEARBOOK_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| "http://localhost:5000".to_string());

        Ok(Self {
            currency: CurrencySettings::new(currency, exchange_rate),
            current_year,
            features,
            email,
            base_url,
        })
    }
}

fn try_load<T, F>(lookup: &F, key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim()
        .parse()
        .map_err(|e| anyhow!("Invalid {key} value '{raw}': {e}"))
}

fn load_flag<F>(lookup: &F, key: &str) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|v| v.trim().to_lowercase()) {
        None => Ok(false),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "" | "0" | "false" | "no" | "off" => Ok(false),
            _ => bail!("Invalid {key} value '{v}' (expected true or false)"),
        },
    }
}

fn load_secret<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
