//! Core library for the `zipcast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The AccuWeather data service client
//! - Shared domain models (current conditions, daily forecast)
//!
//! It is used by `zipcast-cli`, but can also be reused by other binaries or services.

pub mod accuweather;
pub mod config;
pub mod error;
pub mod model;

pub use accuweather::AccuWeather;
pub use config::Config;
pub use error::WeatherError;
pub use model::{CurrentConditions, DailyForecast, FORECAST_DAYS, FiveDayForecast};
