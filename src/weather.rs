//! Current-weather client
//!
//! Fetches current conditions for a city from an OpenWeatherMap-compatible
//! endpoint and reduces the response to a one-line summary plus an icon
//! identifier for later image retrieval.

use reqwest::blocking::Client;
use tracing::{info, warn};

use crate::config::WeatherConfig;
use crate::error::{DayBriefError, Result};

/// Current weather for one city, reduced to what the briefing displays
#[derive(Debug, Clone)]
pub struct WeatherReport {
    pub city: String,
    pub description: String,
    pub temperature_c: f64,
    pub icon_code: String,
}

impl WeatherReport {
    /// One-line human-readable summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Weather in {}: {}, {}°C",
            self.city, self.description, self.temperature_c
        )
    }

    /// URL of the condition icon image for this report
    #[must_use]
    pub fn icon_url(&self) -> String {
        icon_url(&self.icon_code)
    }
}

/// URL of the condition icon image keyed by an icon identifier
#[must_use]
pub fn icon_url(icon_code: &str) -> String {
    format!("https://openweathermap.org/img/wn/{icon_code}@2x.png")
}

/// Weather service client
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    /// Create a new client; fails if no access key is configured
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            DayBriefError::config(
                "Weather access key is not configured (set [weather] api_key or DAYBRIEF_WEATHER__API_KEY)",
            )
        })?;

        let client = Client::builder()
            .user_agent(concat!("daybrief/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key,
        })
    }

    /// Fetch current weather for a city. One blocking call, no retries.
    pub fn fetch_weather(&self, city: &str) -> Result<WeatherReport> {
        if city.trim().is_empty() {
            return Err(DayBriefError::invalid_input("City cannot be empty"));
        }

        info!("Fetching weather for {city}");

        let url = format!(
            "{}/weather?q={}&appid={}&units=metric",
            self.base_url,
            urlencoding::encode(city),
            self.api_key
        );

        let response = self.client.get(&url).send()?;

        let status = response.status();
        if !status.is_success() {
            warn!("Weather service returned {status} for {city}");
            return Err(status_to_error(status.as_u16(), city));
        }

        let payload: openweather::WeatherResponse = response
            .json()
            .map_err(|e| DayBriefError::parse(format!("Failed to parse weather response: {e}")))?;

        payload.into_report(city)
    }
}

/// Map a non-success weather status code onto a domain error
fn status_to_error(status: u16, city: &str) -> DayBriefError {
    match status {
        404 => DayBriefError::invalid_input(format!("Unknown city name: {city}")),
        401 => DayBriefError::invalid_credentials("Weather service rejected the access key"),
        _ => DayBriefError::service(format!("Weather service returned status {status}")),
    }
}

/// OpenWeatherMap response structures
mod openweather {
    use serde::Deserialize;

    use super::WeatherReport;
    use crate::error::{DayBriefError, Result};

    #[derive(Debug, Deserialize)]
    pub(super) struct WeatherResponse {
        pub weather: Vec<Condition>,
        pub main: Main,
    }

    #[derive(Debug, Deserialize)]
    pub(super) struct Condition {
        pub description: String,
        pub icon: String,
    }

    #[derive(Debug, Deserialize)]
    pub(super) struct Main {
        pub temp: f64,
    }

    impl WeatherResponse {
        /// Reduce the raw response to a report for one city
        pub(super) fn into_report(self, city: &str) -> Result<WeatherReport> {
            let condition = self
                .weather
                .into_iter()
                .next()
                .ok_or_else(|| DayBriefError::parse("Weather response contained no conditions"))?;

            Ok(WeatherReport {
                city: city.to_string(),
                description: condition.description,
                temperature_c: self.main.temp,
                icon_code: condition.icon,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SAMPLE_RESPONSE: &str = r#"{
        "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
        "main": {"temp": 17.3, "feels_like": 16.9, "pressure": 1012, "humidity": 62},
        "name": "London"
    }"#;

    #[test]
    fn test_parse_sample_response() {
        let payload: openweather::WeatherResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        let report = payload.into_report("London").unwrap();
        assert_eq!(report.city, "London");
        assert_eq!(report.description, "broken clouds");
        assert_eq!(report.temperature_c, 17.3);
        assert_eq!(report.icon_code, "04d");
    }

    #[test]
    fn test_summary_contains_city_and_temperature() {
        let report = WeatherReport {
            city: "London".to_string(),
            description: "broken clouds".to_string(),
            temperature_c: 17.3,
            icon_code: "04d".to_string(),
        };
        assert_eq!(report.summary(), "Weather in London: broken clouds, 17.3°C");
    }

    #[test]
    fn test_icon_url() {
        let report = WeatherReport {
            city: "London".to_string(),
            description: "clear sky".to_string(),
            temperature_c: 21.0,
            icon_code: "01d".to_string(),
        };
        assert_eq!(
            report.icon_url(),
            "https://openweathermap.org/img/wn/01d@2x.png"
        );
    }

    #[test]
    fn test_empty_conditions_is_parse_error() {
        let payload: openweather::WeatherResponse =
            serde_json::from_str(r#"{"weather": [], "main": {"temp": 5.0}}"#).unwrap();
        let result = payload.into_report("Oslo");
        assert!(matches!(result, Err(DayBriefError::Parse(_))));
    }

    #[rstest]
    #[case(404, "InvalidInput")]
    #[case(401, "InvalidCredentials")]
    #[case(500, "Service")]
    #[case(503, "Service")]
    fn test_status_to_error(#[case] status: u16, #[case] expected: &str) {
        let err = status_to_error(status, "London");
        let matched = match (&err, expected) {
            (DayBriefError::InvalidInput(_), "InvalidInput") => true,
            (DayBriefError::InvalidCredentials(_), "InvalidCredentials") => true,
            (DayBriefError::Service(_), "Service") => true,
            _ => false,
        };
        assert!(matched, "status {status} mapped to {err:?}");
    }

    #[test]
    fn test_unknown_city_error_names_the_city() {
        let err = status_to_error(404, "Atlantis");
        assert!(err.to_string().contains("Atlantis"));
    }
}
