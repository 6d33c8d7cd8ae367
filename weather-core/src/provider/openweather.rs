use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer};

use crate::{
    error::WeatherError,
    model::{ForecastEntry, WeatherSnapshot},
};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different host (used by tests against a mock
    /// server).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    /// GET one of the two endpoints with the fixed query triple and return
    /// the raw body text. The transport status is deliberately not checked:
    /// OpenWeather reports rejections inside the JSON body, and the two
    /// endpoints handle those differently.
    async fn fetch_body(&self, endpoint: &str, city: &str) -> Result<String, WeatherError> {
        let url = format!("{}{endpoint}", self.base_url);
        log::debug!("GET {url}?q={city}");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        Ok(res.text().await?)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        let body = self.fetch_body("/data/2.5/weather", city).await?;

        // The body carries its own status code; anything but 200 means the
        // provider rejected the query and `message` holds its reason.
        let envelope: OwEnvelope = serde_json::from_str(&body)?;
        if envelope.cod != Some(200) {
            let message = envelope
                .message
                .unwrap_or_else(|| "unknown provider error".to_string());
            return Err(WeatherError::provider(message));
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;
        let (description, icon) = first_condition(&parsed.weather);

        Ok(WeatherSnapshot {
            location_name: parsed.name,
            temperature_c: parsed.main.temp,
            description,
            icon,
            observed_at: parsed.dt,
        })
    }

    async fn forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, WeatherError> {
        let body = self.fetch_body("/data/2.5/forecast", city).await?;

        // No embedded-status check here: a rejection body simply has no
        // `list` field and surfaces as a parse failure.
        let parsed: OwForecastResponse = serde_json::from_str(&body)?;

        let entries = parsed
            .list
            .into_iter()
            .map(|item| {
                let (description, icon) = first_condition(&item.weather);
                ForecastEntry {
                    dt: item.dt,
                    dt_txt: item.dt_txt,
                    temperature_c: item.main.temp,
                    description,
                    icon,
                }
            })
            .collect();

        Ok(entries)
    }
}

fn first_condition(weather: &[OwWeather]) -> (String, String) {
    weather
        .first()
        .map(|w| (w.description.clone(), w.icon.clone()))
        .unwrap_or_else(|| ("Unknown".to_string(), String::new()))
}

/// OpenWeather emits `cod` as a number on success and as a quoted string on
/// most rejections; accept both.
fn cod_as_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    })
}

#[derive(Debug, Deserialize)]
struct OwEnvelope {
    #[serde(default, deserialize_with = "cod_as_i64")]
    cod: Option<i64>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastItem {
    dt: i64,
    dt_txt: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastItem>,
}
