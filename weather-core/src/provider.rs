use std::fmt::Debug;

use async_trait::async_trait;

use crate::{
    Config,
    error::WeatherError,
    model::{ForecastEntry, WeatherSnapshot},
    provider::openweather::OpenWeatherProvider,
};

pub mod openweather;

/// Abstraction over the weather data provider.
///
/// The fetch protocol is two sequential calls: `current` first, then
/// `forecast` only if `current` succeeded. The session layer owns that
/// ordering; implementations just answer single requests.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Present-moment conditions for a free-form city query, forwarded to the
    /// provider verbatim (no normalization, empty strings included).
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, WeatherError>;

    /// Raw 5-day/3-hour forecast list for the same query.
    async fn forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, WeatherError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No OpenWeather API key configured.\n\
             Hint: pass `--api-key <KEY>` (add `--remember` to store it)."
        )
    })?;

    Ok(OpenWeatherProvider::new(api_key.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("No OpenWeather API key configured"));
    }

    #[test]
    fn provider_from_config_works_when_key_present() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());
        assert!(provider_from_config(&cfg).is_ok());
    }
}
