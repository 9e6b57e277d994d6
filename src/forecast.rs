//! Compound-growth forecasting.
//!
//! The value after `n` years is defined in terms of the value after `n - 1`
//! years. [`future_value`] recurses once per year, so horizons are capped at
//! [`MAX_FORECAST_YEARS`] to bound stack depth.

use thiserror::Error;
use tracing::{debug, instrument};

/// Longest horizon accepted by [`future_value`] and [`forecast_series`].
pub const MAX_FORECAST_YEARS: u32 = 1_000;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ForecastError {
    #[error("Invalid forecast input: {0}")]
    InvalidInput(String),
}

/// Future value of `present_value` growing at `rate` per year for `years` years.
///
/// `rate` is a fraction, e.g. `0.05` for 5%.
#[instrument]
pub fn future_value(present_value: f64, rate: f64, years: u32) -> Result<f64, ForecastError> {
    validate(present_value, rate, years)?;
    let value = grow(present_value, rate, years);
    debug!(value, "Forecast computed");
    Ok(value)
}

/// Values for every year from `0` through `years`, inclusive.
pub fn forecast_series(present_value: f64, rate: f64, years: u32) -> Result<Vec<f64>, ForecastError> {
    validate(present_value, rate, years)?;
    let mut series = Vec::with_capacity(years as usize + 1);
    let mut value = present_value;
    series.push(value);
    for _ in 0..years {
        value *= 1.0 + rate;
        series.push(value);
    }
    Ok(series)
}

fn grow(present_value: f64, rate: f64, years: u32) -> f64 {
    if years == 0 {
        return present_value;
    }
    grow(present_value, rate, years - 1) * (1.0 + rate)
}

fn validate(present_value: f64, rate: f64, years: u32) -> Result<(), ForecastError> {
    if !present_value.is_finite() {
        return Err(ForecastError::InvalidInput(format!("present value {present_value} is not finite")));
    }
    if !rate.is_finite() || rate < -1.0 {
        return Err(ForecastError::InvalidInput(format!("rate {rate} must be finite and at least -1")));
    }
    if years > MAX_FORECAST_YEARS {
        return Err(ForecastError::InvalidInput(format!("{years} years exceeds the maximum of {MAX_FORECAST_YEARS}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_zero_years_returns_present_value() {
        assert_eq!(future_value(10000.0, 0.05, 0), Ok(10000.0));
    }

    #[test]
    fn test_five_years_at_five_percent() {
        let value = future_value(10000.0, 0.05, 5).unwrap();
        assert!(close(value, 10000.0 * 1.05f64.powi(5)));
        assert_eq!(format!("{value:.2}"), "12762.82");
    }

    #[test]
    fn test_negative_growth() {
        let value = future_value(1000.0, -0.5, 2).unwrap();
        assert!(close(value, 250.0));
    }

    #[test]
    fn test_series_matches_single_values() {
        let series = forecast_series(500.0, 0.1, 3).unwrap();
        assert_eq!(series.len(), 4);
        assert_eq!(series[0], 500.0);
        for (year, value) in series.iter().enumerate() {
            assert!(close(*value, future_value(500.0, 0.1, year as u32).unwrap()));
        }
    }

    #[test]
    fn test_total_loss_rate() {
        assert_eq!(future_value(100.0, -1.0, 0), Ok(100.0));
        assert_eq!(future_value(100.0, -1.0, 3), Ok(0.0));
        assert_eq!(forecast_series(100.0, -1.0, 2), Ok(vec![100.0, 0.0, 0.0]));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(future_value(f64::NAN, 0.05, 1).is_err());
        assert!(future_value(100.0, -1.5, 1).is_err());
        assert!(forecast_series(100.0, f64::INFINITY, 1).is_err());
    }

    #[test]
    fn test_horizon_is_capped() {
        assert!(future_value(1.0, 0.0, MAX_FORECAST_YEARS).is_ok());
        assert_eq!(forecast_series(1.0, 0.0, MAX_FORECAST_YEARS).unwrap().len(), MAX_FORECAST_YEARS as usize + 1);

        assert!(matches!(
            future_value(1.0, 0.0, 5_000_000),
            Err(ForecastError::InvalidInput(_))
        ));
        assert!(matches!(
            forecast_series(1.0, 0.0, MAX_FORECAST_YEARS + 1),
            Err(ForecastError::InvalidInput(_))
        ));
    }
}
