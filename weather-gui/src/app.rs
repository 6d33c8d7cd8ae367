use std::sync::{
    Arc,
    mpsc::{self, Receiver, Sender},
};

use eframe::egui::{
    Button, CentralPanel, Context, Frame, Image, Key, Margin, RichText, ScrollArea, Spinner,
    TextEdit, Ui, Vec2,
};

use weather_core::{
    Config, ForecastEntry, Session, SessionEvent, WeatherProvider, daily_forecast, format_day,
    format_time, provider_from_config, run_fetch,
};

use crate::{anim, cli::Cli, style};

pub struct App {
    city: String,
    session: Session,
    provider: Arc<dyn WeatherProvider>,
    rt: tokio::runtime::Runtime,
    events_tx: Sender<SessionEvent>,
    events_rx: Receiver<SessionEvent>,
    /// Clock time (egui seconds) of the latest non-empty forecast arrival;
    /// restarts the slide-in whenever a new forecast lands.
    slide_started: Option<f64>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<Self> {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let mut config = Config::load()?;
        if let Some(key) = args.api_key {
            config.set_api_key(key);
            if args.remember {
                config.save()?;
                log::info!("API key saved to {}", Config::config_file_path()?.display());
            }
        }

        let provider: Arc<dyn WeatherProvider> = Arc::new(provider_from_config(&config)?);

        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        let (events_tx, events_rx) = mpsc::channel();

        Ok(Self {
            city: String::new(),
            session: Session::default(),
            provider,
            rt,
            events_tx,
            events_rx,
            slide_started: None,
        })
    }

    /// Start a fetch sequence for whatever is in the input box, verbatim.
    /// A sequence already in flight keeps running; responses are applied in
    /// arrival order, so the last one to land wins.
    fn submit(&mut self) {
        self.session.submit();
        self.rt.spawn(run_fetch(
            Arc::clone(&self.provider),
            self.city.clone(),
            self.events_tx.clone(),
        ));
    }

    fn drain_events(&mut self, ctx: &Context) {
        while let Ok(event) = self.events_rx.try_recv() {
            if matches!(&event, SessionEvent::ForecastOk(list) if !list.is_empty()) {
                self.slide_started = Some(ctx.input(|i| i.time));
            }
            self.session.apply(event);
        }
    }

    fn render_banner(&self, ui: &mut Ui, now: f64) {
        let progress = anim::pulse_progress(now);
        let size = 24.0 * anim::pulse_scale(progress);
        ui.scope(|ui| {
            ui.set_opacity(progress);
            ui.label(
                RichText::new("Powered by OpenWeather")
                    .size(size)
                    .strong()
                    .color(style::TEXT),
            );
        });
    }

    fn render_input(&mut self, ui: &mut Ui) {
        let field = ui.add(
            TextEdit::singleline(&mut self.city)
                .hint_text("Enter city name")
                .desired_width(320.0),
        );
        let submitted_via_enter =
            field.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

        ui.add_space(10.0);
        let button = ui.add(
            Button::new(RichText::new("Get Weather").color(style::TEXT))
                .fill(style::ACCENT_GREEN),
        );

        if button.clicked() || submitted_via_enter {
            self.submit();
        }
    }

    fn render_current(&self, ui: &mut Ui) {
        let Some(snap) = &self.session.snapshot else {
            return;
        };

        Frame::new()
            .fill(style::ACCENT_GREEN)
            .corner_radius(18)
            .inner_margin(Margin::same(15))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(format!("Current Conditions in {}", snap.location_name))
                            .size(20.0)
                            .color(style::TEXT),
                    );
                    ui.label(
                        RichText::new(format!("{}°C", snap.temperature_c.round() as i64))
                            .size(36.0)
                            .color(style::TEXT),
                    );
                    ui.label(
                        RichText::new(&snap.description)
                            .size(18.0)
                            .color(style::TEXT),
                    );
                    ui.label(
                        RichText::new(format_day(snap.observed_at))
                            .size(16.0)
                            .color(style::TEXT),
                    );
                    ui.add(
                        Image::from_uri(snap.icon_url())
                            .fit_to_exact_size(Vec2::splat(100.0)),
                    );
                });
            });
    }

    fn render_forecast(&self, ui: &mut Ui, now: f64) {
        if self.session.forecast.is_empty() {
            return;
        }

        let offset = match self.slide_started {
            Some(started) => anim::slide_offset((now - started) as f32),
            None => 0.0,
        };

        // The container slides up into place; opacity follows the offset.
        ui.add_space(offset);
        ui.scope(|ui| {
            ui.set_opacity(anim::slide_opacity(offset));
            ui.label(RichText::new("Forecast").size(20.0).color(style::TEXT));
            ui.add_space(10.0);

            let daily = daily_forecast(&self.session.forecast);
            let is_narrow = ui.available_width() < style::NARROW_WIDTH;

            if is_narrow {
                // Wrapped rows, centered; same cards as the wide layout.
                ui.horizontal_wrapped(|ui| {
                    for entry in &daily {
                        forecast_card(ui, entry);
                    }
                });
            } else {
                ScrollArea::horizontal()
                    .scroll_bar_visibility(
                        eframe::egui::scroll_area::ScrollBarVisibility::AlwaysHidden,
                    )
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            for entry in &daily {
                                forecast_card(ui, entry);
                            }
                        });
                    });
            }
        });
    }
}

fn forecast_card(ui: &mut Ui, entry: &ForecastEntry) {
    Frame::new()
        .fill(style::ACCENT_WARM)
        .corner_radius(8)
        .inner_margin(Margin::same(10))
        .outer_margin(Margin::same(5))
        .show(ui, |ui| {
            ui.set_width(style::FORECAST_CARD_WIDTH);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(format_day(entry.dt))
                        .size(14.0)
                        .color(style::TEXT),
                );
                ui.label(
                    RichText::new(format_time(entry.dt))
                        .size(12.0)
                        .color(style::TEXT),
                );
                ui.label(
                    RichText::new(format!("{}°C", entry.temperature_c.round() as i64))
                        .size(18.0)
                        .color(style::TEXT),
                );
                ui.add(Image::from_uri(entry.icon_url()).fit_to_exact_size(Vec2::splat(50.0)));
            });
        });
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.drain_events(ctx);
        let now = ctx.input(|i| i.time);

        CentralPanel::default()
            .frame(Frame::new().fill(style::BACKGROUND).inner_margin(Margin::same(15)))
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        self.render_banner(ui, now);
                        ui.add_space(10.0);
                        ui.label(
                            RichText::new("Weather App")
                                .size(28.0)
                                .strong()
                                .color(style::TEXT),
                        );
                        ui.add_space(20.0);
                        self.render_input(ui);
                        ui.add_space(15.0);

                        if self.session.loading() {
                            ui.add(Spinner::new().size(32.0).color(style::ACCENT_WARM));
                        }
                        if !self.session.error.is_empty() {
                            ui.label(
                                RichText::new(&self.session.error).color(style::ACCENT_WARM),
                            );
                        }

                        self.render_current(ui);
                        ui.add_space(20.0);
                        self.render_forecast(ui, now);
                    });
                });
            });

        // The banner pulse never stops, so every frame schedules the next.
        ctx.request_repaint();
    }
}
