use serde::{Deserialize, Serialize};

/// URL template for the provider's weather icons; the rendering layer fetches
/// these as plain image resources.
const ICON_URL_TEMPLATE: &str = "https://openweathermap.org/img/wn/{icon}@2x.png";

fn icon_url(code: &str) -> String {
    ICON_URL_TEMPLATE.replace("{icon}", code)
}

/// Result of the current-conditions call. Lives until replaced by the next
/// query; an error does NOT clear it (stale data stays visible).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub temperature_c: f64,
    pub description: String,
    /// Provider's short icon code, e.g. "10d".
    pub icon: String,
    /// UNIX seconds of the observation.
    pub observed_at: i64,
}

impl WeatherSnapshot {
    pub fn icon_url(&self) -> String {
        icon_url(&self.icon)
    }
}

/// One element of the raw forecast list, at the provider's 3-hour granularity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// UNIX seconds of the forecast sample.
    pub dt: i64,
    /// Text timestamp, `YYYY-MM-DD HH:MM:SS`; its date prefix is the
    /// day-grouping key.
    pub dt_txt: String,
    pub temperature_c: f64,
    pub description: String,
    pub icon: String,
}

impl ForecastEntry {
    pub fn icon_url(&self) -> String {
        icon_url(&self.icon)
    }

    /// Calendar-date portion of `dt_txt` (everything before the first space).
    pub fn date_key(&self) -> &str {
        self.dt_txt.split(' ').next().unwrap_or(&self.dt_txt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_url_uses_2x_template() {
        let snap = WeatherSnapshot {
            location_name: "London".into(),
            temperature_c: 11.2,
            description: "light rain".into(),
            icon: "10d".into(),
            observed_at: 1_704_067_200,
        };
        assert_eq!(snap.icon_url(), "https://openweathermap.org/img/wn/10d@2x.png");
    }

    #[test]
    fn date_key_is_prefix_before_first_space() {
        let entry = ForecastEntry {
            dt: 0,
            dt_txt: "2024-01-01 03:00:00".into(),
            temperature_c: 0.0,
            description: String::new(),
            icon: String::new(),
        };
        assert_eq!(entry.date_key(), "2024-01-01");
    }

    #[test]
    fn date_key_falls_back_to_whole_string() {
        let entry = ForecastEntry {
            dt: 0,
            dt_txt: "2024-01-01".into(),
            temperature_c: 0.0,
            description: String::new(),
            icon: String::new(),
        };
        assert_eq!(entry.date_key(), "2024-01-01");
    }
}
