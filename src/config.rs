use crate::models::TemperatureUnit;
use crate::recommend::WarmSplit;
use anyhow::{Context, Result, anyhow};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Settings for the weather service
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub units: TemperatureUnit,
    pub timeout_secs: u64,
}

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub weather: WeatherConfig,
    pub warm_split: Option<WarmSplit>,
}

/// Load configuration from `.env` and environment
pub fn load_config() -> Result<Config> {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    from_lookup(|key| std::env::var(key).ok())
}

/// Build the configuration from a variable lookup. Missing optional values
/// fall back to defaults; present but invalid values are errors.
fn from_lookup<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let units = match get("WEATHER_UNITS") {
        Some(value) => TemperatureUnit::parse(&value)
            .ok_or_else(|| anyhow!("WEATHER_UNITS must be imperial, metric or standard, got '{value}'"))?,
        None => TemperatureUnit::Fahrenheit,
    };

    let timeout_secs = match get("WEATHER_TIMEOUT_SECS") {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .with_context(|| format!("invalid WEATHER_TIMEOUT_SECS '{value}'"))?,
        None => DEFAULT_TIMEOUT_SECS,
    };

    let warm_split = get("WARM_THRESHOLD_CELSIUS")
        .map(|value| {
            value
                .trim()
                .parse::<f64>()
                .map(WarmSplit::new)
                .with_context(|| format!("invalid WARM_THRESHOLD_CELSIUS '{value}'"))
        })
        .transpose()?;

    Ok(Config {
        weather: WeatherConfig {
            api_key: get("OPENWEATHER_API_KEY"),
            base_url: get("WEATHER_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            units,
            timeout_secs,
        },
        warm_split,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.weather.api_key, None);
        assert_eq!(config.weather.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.weather.units, TemperatureUnit::Fahrenheit);
        assert_eq!(config.weather.timeout_secs, 5);
        assert!(config.warm_split.is_none());
    }

    #[test]
    fn test_explicit_values() {
        let config = config_from(&[
            ("OPENWEATHER_API_KEY", "abc123"),
            ("WEATHER_UNITS", "metric"),
            ("WEATHER_TIMEOUT_SECS", "2"),
            ("WARM_THRESHOLD_CELSIUS", "22.5"),
        ])
        .unwrap();

        assert_eq!(config.weather.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.weather.units, TemperatureUnit::Celsius);
        assert_eq!(config.weather.timeout_secs, 2);
        assert_eq!(config.warm_split, Some(WarmSplit::new(22.5)));
    }

    #[test]
    fn test_blank_api_key_is_absent() {
        let config = config_from(&[("OPENWEATHER_API_KEY", "  ")]).unwrap();
        assert_eq!(config.weather.api_key, None);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(config_from(&[("WEATHER_UNITS", "kelvinish")]).is_err());
        assert!(config_from(&[("WEATHER_TIMEOUT_SECS", "soon")]).is_err());
        assert!(config_from(&[("WARM_THRESHOLD_CELSIUS", "hot")]).is_err());
    }
}
