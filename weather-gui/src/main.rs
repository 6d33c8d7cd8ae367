//! Binary crate for the weather desktop app.
//!
//! This crate focuses on:
//! - Parsing CLI arguments (credential injection)
//! - The egui presentation layer: input, result views, decorative animation

use clap::Parser;
use eframe::NativeOptions;

mod anim;
mod app;
mod cli;
mod style;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Cli::parse();

    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([520.0, 800.0])
            .with_title("Weather App"),
        ..Default::default()
    };

    eframe::run_native(
        "Weather App",
        options,
        Box::new(move |cc| Ok(Box::new(app::App::new(cc, args)?))),
    )
}
