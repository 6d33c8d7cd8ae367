use thiserror::Error;

/// Failure modes of a weather fetch.
///
/// `Provider` carries the provider's own error text (e.g. "city not found")
/// and is shown to the user verbatim. The remaining variants surface the
/// underlying failure's description instead.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The provider answered, but its payload carried a non-success status.
    #[error("{message}")]
    Provider { message: String },

    /// The request never produced a usable response body.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON we expected.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

impl WeatherError {
    pub fn provider(message: impl Into<String>) -> Self {
        WeatherError::Provider { message: message.into() }
    }
}
