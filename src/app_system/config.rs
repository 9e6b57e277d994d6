use std::str::FromStr;
use tracing::warn;

pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_PRESENT_VALUE: f64 = 10000.0;
pub const DEFAULT_GROWTH_RATE: f64 = 0.05;
pub const DEFAULT_FORECAST_YEARS: u32 = 5;

/// Knobs for the demo binary, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Filter used when `RUST_LOG` is not set (`INVENTORY_LOG`).
    pub log_filter: String,
    /// `FORECAST_PRESENT_VALUE`
    pub present_value: f64,
    /// `FORECAST_RATE`
    pub growth_rate: f64,
    /// `FORECAST_YEARS`
    pub forecast_years: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            present_value: DEFAULT_PRESENT_VALUE,
            growth_rate: DEFAULT_GROWTH_RATE,
            forecast_years: DEFAULT_FORECAST_YEARS,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Missing keys keep their
    /// defaults, unparseable ones too (with a warning).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_filter: lookup("INVENTORY_LOG").unwrap_or(defaults.log_filter),
            present_value: parse_or(&lookup, "FORECAST_PRESENT_VALUE", defaults.present_value),
            growth_rate: parse_or(&lookup, "FORECAST_RATE", defaults.growth_rate),
            forecast_years: parse_or(&lookup, "FORECAST_YEARS", defaults.forecast_years),
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, default = %default, "Ignoring unparseable setting");
            default
        }),
    }
}
