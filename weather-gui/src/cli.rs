use clap::Parser;

/// Top-level CLI struct.
#[derive(Debug, Clone, Parser)]
#[command(name = "weather-gui", version, about = "Weather desktop app")]
pub struct Cli {
    /// OpenWeather API key; overrides the one in the config file.
    #[arg(long)]
    pub api_key: Option<String>,

    /// Persist the supplied API key to the config file.
    #[arg(long, requires = "api_key")]
    pub remember: bool,
}
