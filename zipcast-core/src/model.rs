use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Number of days covered by the daily forecast endpoint.
pub const FORECAST_DAYS: usize = 5;

/// Current observed weather for a location, in Imperial units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_f: f64,
    pub weather_text: String,
}

/// One day of the daily forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Local date of the forecast day, as reported by the provider.
    pub date: DateTime<FixedOffset>,
    pub minimum_f: f64,
    pub maximum_f: f64,
}

/// Five consecutive days of forecast, today first.
///
/// `days` always holds exactly [`FORECAST_DAYS`] entries; the client rejects
/// shorter responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiveDayForecast {
    pub days: Vec<DailyForecast>,
}
