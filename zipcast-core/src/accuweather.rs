use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    error::WeatherError,
    model::{CurrentConditions, DailyForecast, FORECAST_DAYS, FiveDayForecast},
};

/// Production endpoint host for the AccuWeather data service.
pub const DEFAULT_BASE_URL: &str = "http://dataservice.accuweather.com";

/// Client for the AccuWeather data service.
///
/// All three lookups are plain GET requests authenticated with the same
/// `apikey` query parameter.
#[derive(Debug, Clone)]
pub struct AccuWeather {
    api_key: String,
    base_url: String,
    http: Client,
}

impl AccuWeather {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_owned())
    }

    /// Point the client at a different host. Used by the integration tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    /// Resolve a zip code to the provider's opaque location key via the
    /// postal-code search endpoint.
    ///
    /// An empty result list means the zip code matched nothing.
    pub async fn search_postal_code(&self, zipcode: &str) -> Result<String, WeatherError> {
        let url = format!("{}/locations/v1/postalcodes/search", self.base_url);
        debug!("searching postal code {zipcode}");

        let results: Vec<AwLocation> =
            self.get_json(&url, &[("apikey", self.api_key.as_str()), ("q", zipcode)]).await?;

        let first = results.into_iter().next().ok_or(WeatherError::NoSuchLocation)?;
        Ok(first.key)
    }

    /// Fetch the current temperature and text description for a location key.
    pub async fn current_conditions(
        &self,
        location_key: &str,
    ) -> Result<CurrentConditions, WeatherError> {
        let url = format!("{}/currentconditions/v1/{location_key}", self.base_url);
        debug!("fetching current conditions for location key {location_key}");

        let entries: Vec<AwCondition> =
            self.get_json(&url, &[("apikey", self.api_key.as_str())]).await?;

        let entry = entries.into_iter().next().ok_or_else(|| {
            WeatherError::BadResponse("current conditions response was empty".to_owned())
        })?;

        Ok(CurrentConditions {
            temperature_f: entry.temperature.imperial.value,
            weather_text: entry.weather_text,
        })
    }

    /// Fetch the 5-day daily forecast for a location key.
    pub async fn five_day_forecast(
        &self,
        location_key: &str,
    ) -> Result<FiveDayForecast, WeatherError> {
        let url = format!("{}/forecasts/v1/daily/5day/{location_key}", self.base_url);
        debug!("fetching 5-day forecast for location key {location_key}");

        let parsed: AwForecastResponse =
            self.get_json(&url, &[("apikey", self.api_key.as_str())]).await?;

        if parsed.daily_forecasts.len() < FORECAST_DAYS {
            return Err(WeatherError::BadResponse(format!(
                "expected {FORECAST_DAYS} daily forecasts, got {}",
                parsed.daily_forecasts.len()
            )));
        }

        let days = parsed
            .daily_forecasts
            .into_iter()
            .take(FORECAST_DAYS)
            .map(|day| {
                let date = DateTime::parse_from_rfc3339(&day.date).map_err(|_| {
                    WeatherError::BadResponse(format!("unparseable forecast date '{}'", day.date))
                })?;

                Ok(DailyForecast {
                    date,
                    minimum_f: day.temperature.minimum.value,
                    maximum_f: day.temperature.maximum.value,
                })
            })
            .collect::<Result<Vec<_>, WeatherError>>()?;

        Ok(FiveDayForecast { days })
    }

    /// GET a JSON endpoint and parse the body.
    ///
    /// Non-success statuses become [`WeatherError::Api`]; a success body that
    /// does not match `T` becomes [`WeatherError::BadResponse`].
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, WeatherError> {
        let res = self.http.get(url).query(query).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Api { status, body: truncate_body(&body) });
        }

        serde_json::from_str(&body).map_err(|err| WeatherError::BadResponse(err.to_string()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AwLocation {
    key: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AwUnitValue {
    value: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AwTemperature {
    imperial: AwUnitValue,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AwCondition {
    weather_text: String,
    temperature: AwTemperature,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AwTemperatureRange {
    minimum: AwUnitValue,
    maximum: AwUnitValue,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AwDailyForecast {
    date: String,
    temperature: AwTemperatureRange,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AwForecastResponse {
    daily_forecasts: Vec<AwDailyForecast>,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
