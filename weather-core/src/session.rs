//! Query session state machine and the two-call fetch protocol.
//!
//! A submit spawns one fetch sequence; the sequence reports back through
//! [`SessionEvent`]s which the owner applies in arrival order. Nothing stops
//! a second submit while the first is still in flight: both sequences run to
//! completion and the last event to arrive wins, regardless of which request
//! went out first. A generation counter checked before each apply would close
//! that race; it is left out on purpose.

use std::sync::{Arc, mpsc::Sender};

use crate::{
    model::{ForecastEntry, WeatherSnapshot},
    provider::WeatherProvider,
};

/// Observable states of a query session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

/// Progress reports emitted by a fetch sequence.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Current-conditions call succeeded; the forecast call follows.
    CurrentOk(WeatherSnapshot),
    /// Current-conditions call failed; the forecast call is never issued.
    CurrentFailed(String),
    /// Forecast call succeeded with the provider's full raw list.
    ForecastOk(Vec<ForecastEntry>),
    /// Forecast call failed; a snapshot from the same round stays visible.
    ForecastFailed(String),
}

/// Session state rendered by the presentation layer.
///
/// Prior snapshot and forecast data survive both a resubmit and a failure:
/// stale results stay on screen next to a fresh error message.
#[derive(Debug, Default)]
pub struct Session {
    phase: Phase,
    /// Empty unless the most recent fetch failed.
    pub error: String,
    pub snapshot: Option<WeatherSnapshot>,
    /// Full raw forecast list as returned by the provider; the daily view is
    /// derived from it on demand.
    pub forecast: Vec<ForecastEntry>,
}

impl Session {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Begin a new query: clear the error, keep everything else.
    pub fn submit(&mut self) {
        self.phase = Phase::Loading;
        self.error.clear();
    }

    /// Apply one fetch event. Events are applied unconditionally in arrival
    /// order, so overlapping fetch sequences interleave exactly as their
    /// responses land.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::CurrentOk(snapshot) => {
                self.snapshot = Some(snapshot);
            }
            SessionEvent::CurrentFailed(reason) => {
                self.phase = Phase::Failed;
                self.error = reason;
            }
            SessionEvent::ForecastOk(list) => {
                self.phase = Phase::Success;
                self.forecast = list;
            }
            SessionEvent::ForecastFailed(reason) => {
                self.phase = Phase::Failed;
                self.error = reason;
            }
        }
    }
}

/// Run one fetch sequence: current conditions first, forecast only after the
/// current-conditions call succeeded. Send failures are ignored; they only
/// mean the listening side is gone.
pub async fn run_fetch(
    provider: Arc<dyn WeatherProvider>,
    city: String,
    tx: Sender<SessionEvent>,
) {
    log::info!("fetching weather for {city:?}");

    match provider.current(&city).await {
        Ok(snapshot) => {
            let _ = tx.send(SessionEvent::CurrentOk(snapshot));
        }
        Err(err) => {
            log::warn!("current-conditions fetch failed: {err}");
            let _ = tx.send(SessionEvent::CurrentFailed(err.to_string()));
            return;
        }
    }

    match provider.forecast(&city).await {
        Ok(list) => {
            log::info!("forecast for {city:?}: {} entries", list.len());
            let _ = tx.send(SessionEvent::ForecastOk(list));
        }
        Err(err) => {
            log::warn!("forecast fetch failed: {err}");
            let _ = tx.send(SessionEvent::ForecastFailed(err.to_string()));
        }
    }
}
