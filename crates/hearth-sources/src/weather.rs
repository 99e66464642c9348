//! Current weather from the Open-Meteo forecast API (no key required).

use hearth_core::{config::WeatherConfig, error::HearthError};
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

/// Current conditions at the configured location.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    /// Degrees Celsius; `None` when the provider omitted it.
    pub temperature: Option<f64>,
    /// km/h; `None` when the provider omitted it.
    pub windspeed: Option<f64>,
    pub condition: WeatherCondition,
}

/// WMO weather interpretation code, reduced to the cases we describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCondition {
    Clear,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    RimeFog,
    Drizzle,
    DenseDrizzle,
    LightRain,
    Rain,
    HeavyRain,
    LightSnow,
    Snow,
    HeavySnow,
    Thunderstorm,
    Unknown,
}

impl WeatherCondition {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Clear,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 => Self::Fog,
            48 => Self::RimeFog,
            51 | 53 => Self::Drizzle,
            55 => Self::DenseDrizzle,
            61 => Self::LightRain,
            63 => Self::Rain,
            65 => Self::HeavyRain,
            71 => Self::LightSnow,
            73 => Self::Snow,
            75 => Self::HeavySnow,
            95 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    current_weather: Option<RawCurrent>,
}

#[derive(Debug, Deserialize)]
struct RawCurrent {
    temperature: Option<f64>,
    windspeed: Option<f64>,
    /// Missing code reads as 0 (clear).
    #[serde(default)]
    weathercode: i64,
}

/// Open-Meteo client for one location.
pub struct WeatherClient {
    client: reqwest::Client,
    config: WeatherConfig,
    timeout: Duration,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            timeout,
        }
    }

    /// Fetch current conditions. Non-200 or a malformed body is an error.
    pub async fn current(&self) -> Result<CurrentWeather, HearthError> {
        let url = format!(
            "{}/v1/forecast",
            self.config.base_url.trim_end_matches('/')
        );
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("latitude", self.config.latitude.to_string()),
                ("longitude", self.config.longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("temperature_unit", "celsius".to_string()),
                ("timezone", self.config.timezone.clone()),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| HearthError::Source(format!("weather request failed: {e}")))?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(HearthError::Source(format!("weather returned {status}")));
        }

        let body: ForecastResponse = resp
            .json()
            .await
            .map_err(|e| HearthError::Source(format!("weather parse failed: {e}")))?;

        let raw = body.current_weather.unwrap_or(RawCurrent {
            temperature: None,
            windspeed: None,
            weathercode: 0,
        });
        let weather = CurrentWeather {
            temperature: raw.temperature,
            windspeed: raw.windspeed,
            condition: WeatherCondition::from_code(raw.weathercode),
        };
        info!(
            "weather fetched: {:?}°C, {:?}",
            weather.temperature, weather.condition
        );
        Ok(weather)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> WeatherClient {
        let config = WeatherConfig {
            base_url: server.uri(),
            ..WeatherConfig::default()
        };
        WeatherClient::new(config, Duration::from_secs(2))
    }

    #[test]
    fn test_condition_table() {
        assert_eq!(WeatherCondition::from_code(0), WeatherCondition::Clear);
        assert_eq!(WeatherCondition::from_code(53), WeatherCondition::Drizzle);
        assert_eq!(
            WeatherCondition::from_code(55),
            WeatherCondition::DenseDrizzle
        );
        assert_eq!(
            WeatherCondition::from_code(95),
            WeatherCondition::Thunderstorm
        );
        assert_eq!(WeatherCondition::from_code(80), WeatherCondition::Unknown);
    }

    #[tokio::test]
    async fn test_current_weather_parsed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("current_weather", "true"))
            .and(query_param("timezone", "Europe/Moscow"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "current_weather": { "temperature": -3.5, "windspeed": 12.0, "weathercode": 73 }
            })))
            .mount(&server)
            .await;

        let weather = client(&server).current().await.unwrap();
        assert_eq!(weather.temperature, Some(-3.5));
        assert_eq!(weather.windspeed, Some(12.0));
        assert_eq!(weather.condition, WeatherCondition::Snow);
    }

    #[tokio::test]
    async fn test_missing_fields_tolerated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "current_weather": {}
            })))
            .mount(&server)
            .await;

        let weather = client(&server).current().await.unwrap();
        assert_eq!(weather.temperature, None);
        assert_eq!(weather.condition, WeatherCondition::Clear);
    }

    #[tokio::test]
    async fn test_server_error_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        assert!(client(&server).current().await.is_err());
    }
}
