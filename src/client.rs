use crate::config::WeatherConfig;
use crate::error::WeatherError;
use crate::models::{CurrentWeatherResponse, TemperatureUnit, WeatherObservation};
use std::time::Duration;
use tracing::debug;
use ureq::{Agent, AgentBuilder};
use urlencoding::encode;

#[cfg(test)]
use mockall::automock;

/// Anything that can report the current weather for a city
#[cfg_attr(test, automock)]
pub trait WeatherProvider {
    fn current_weather(&self, city: &str) -> Result<WeatherObservation, WeatherError>;
}

/// A blocking client for the OpenWeather current weather endpoint
pub struct OpenWeatherClient {
    agent: Agent,
    base_url: String,
    api_key: Option<String>,
    units: TemperatureUnit,
}

impl OpenWeatherClient {
    /// Create a new client; every request is bounded by the configured timeout
    pub fn new(config: WeatherConfig) -> Self {
        let agent = AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();

        OpenWeatherClient {
            agent,
            base_url: config.base_url,
            api_key: config.api_key,
            units: config.units,
        }
    }

    fn request_url(&self, city: &str, api_key: &str) -> String {
        format!(
            "{}?q={}&appid={}&units={}",
            self.base_url.trim_end_matches('/'),
            encode(city),
            encode(api_key),
            self.units.api_param()
        )
    }
}

impl WeatherProvider for OpenWeatherClient {
    fn current_weather(&self, city: &str) -> Result<WeatherObservation, WeatherError> {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;
        let url = self.request_url(city, api_key);

        debug!("Requesting current weather for '{city}'");
        let response = self.agent.get(&url).call().map_err(|e| match e {
            ureq::Error::Status(status, response) => WeatherError::Status {
                status,
                message: response.into_string().unwrap_or_default(),
            },
            ureq::Error::Transport(t) => WeatherError::Transport(t.to_string()),
        })?;

        let body = response
            .into_string()
            .map_err(|e| WeatherError::Transport(e.to_string()))?;

        parse_observation(&body, self.units)
    }
}

/// Extract the condition description and temperature from a response body
pub fn parse_observation(
    body: &str,
    units: TemperatureUnit,
) -> Result<WeatherObservation, WeatherError> {
    let parsed: CurrentWeatherResponse =
        serde_json::from_str(body).map_err(|e| WeatherError::Malformed(e.to_string()))?;

    let condition = parsed
        .weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .ok_or_else(|| WeatherError::Malformed("no weather conditions in response".to_string()))?;

    Ok(WeatherObservation {
        condition,
        temperature: parsed.main.temp,
        unit: units,
    })
}
