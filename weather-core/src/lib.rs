//! Core library for the weather desktop app.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the weather provider (OpenWeather client)
//! - Shared domain models (snapshot, forecast entries)
//! - The query session state machine and the daily-forecast derivation
//!
//! It is used by `weather-gui`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod forecast;
pub mod model;
pub mod provider;
pub mod session;

pub use config::Config;
pub use error::WeatherError;
pub use forecast::{daily_forecast, format_day, format_time};
pub use model::{ForecastEntry, WeatherSnapshot};
pub use provider::{WeatherProvider, provider_from_config};
pub use session::{Phase, Session, SessionEvent, run_fetch};
