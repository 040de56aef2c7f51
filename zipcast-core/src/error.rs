use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the AccuWeather client.
///
/// Only `NoSuchLocation` and `BadResponse` are user-facing conditions; the
/// remaining variants are surfaced unchanged and terminate the lookup.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The postal-code search matched nothing.
    #[error("no location matched the given zip code")]
    NoSuchLocation,

    /// A successful response whose body did not have the expected shape.
    #[error("malformed response from the weather service: {0}")]
    BadResponse(String),

    /// Transport-level failure (DNS, connection, body read).
    #[error("request to the weather service failed")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("weather service returned status {status}: {body}")]
    Api { status: StatusCode, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_such_location_message() {
        let err = WeatherError::NoSuchLocation;
        assert_eq!(err.to_string(), "no location matched the given zip code");
    }

    #[test]
    fn bad_response_message_carries_detail() {
        let err = WeatherError::BadResponse("expected a list".into());
        assert!(err.to_string().contains("expected a list"));
    }
}
