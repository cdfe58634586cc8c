//! Terminal application state
//!
//! Owns the map region, the latest weather snapshot and the unit toggle,
//! and moves refresh work onto background tasks so the draw loop never
//! blocks on the network.

use std::sync::Arc;

use application::{ApplicationError, ForecastService, WeatherSnapshot};
use crossterm::event::{KeyCode, KeyEvent};
use domain::{MapRegion, TemperatureUnit};
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

/// Shown in place of the location name when a lookup fails
pub const WEATHER_ERROR_MESSAGE: &str = "Could not detect the weather for your location";

/// Shown for the temperature while no forecast is available
pub const TEMPERATURE_PLACEHOLDER: &str = "...";

type RefreshResult = Result<WeatherSnapshot, ApplicationError>;

/// Terminal application state
#[derive(Debug)]
pub struct App {
    /// Map region currently on screen
    pub region: MapRegion,
    /// Unit used for every displayed temperature
    pub unit: TemperatureUnit,
    /// Latest completed lookup, kept across failed refreshes
    pub snapshot: Option<WeatherSnapshot>,
    /// User-facing message from the last failed refresh
    pub error: Option<String>,
    /// Whether a refresh is in flight
    pub refreshing: bool,

    service: Arc<ForecastService>,

    update_tx: mpsc::UnboundedSender<RefreshResult>,
    update_rx: mpsc::UnboundedReceiver<RefreshResult>,
}

impl App {
    /// Create the app over a starting map region
    #[must_use]
    pub fn new(service: Arc<ForecastService>, region: MapRegion) -> Self {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        Self {
            region,
            unit: TemperatureUnit::default(),
            snapshot: None,
            error: None,
            refreshing: false,
            service,
            update_tx,
            update_rx,
        }
    }

    /// Handle a key press, returns true when the app should exit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('u') => {
                self.unit = self.unit.toggled();
                debug!(unit = %self.unit, "Toggled temperature unit");
            },
            KeyCode::Char('r') => self.request_refresh(),
            _ => {},
        }
        false
    }

    /// Start a weather refresh unless one is already running
    pub fn request_refresh(&mut self) {
        if self.refreshing {
            debug!("Refresh already in flight, ignoring request");
            return;
        }
        self.refreshing = true;

        let service = Arc::clone(&self.service);
        let tx = self.update_tx.clone();
        tokio::spawn(async move {
            let result = service.fetch_local_weather().await;
            if tx.send(result).is_err() {
                debug!("Refresh finished after the app shut down");
            }
        });
    }

    /// Drain completed refreshes into the display state
    pub fn tick(&mut self) {
        while let Ok(result) = self.update_rx.try_recv() {
            self.refreshing = false;
            match result {
                Ok(snapshot) => {
                    debug!(place = %snapshot.place, "Weather refresh completed");
                    self.region = self.region.recentered(snapshot.position);
                    self.snapshot = Some(snapshot);
                    self.error = None;
                },
                Err(err) => {
                    if err.is_retryable() {
                        warn!(error = %err, "Weather refresh failed");
                    } else {
                        error!(error = %err, "Weather refresh failed");
                    }
                    self.error = Some(WEATHER_ERROR_MESSAGE.to_string());
                },
            }
        }
    }

    /// Text for the location line: the error message when one is set,
    /// otherwise the resolved place name
    #[must_use]
    pub fn location_label(&self) -> &str {
        if let Some(error) = &self.error {
            return error;
        }
        self.snapshot
            .as_ref()
            .map_or("Loading...", |snapshot| snapshot.place.title.as_str())
    }

    /// Today's temperature in the active unit, or a placeholder when the
    /// forecast is empty
    #[must_use]
    pub fn temperature_label(&self) -> String {
        self.snapshot
            .as_ref()
            .and_then(WeatherSnapshot::current)
            .map_or_else(
                || TEMPERATURE_PLACEHOLDER.to_string(),
                |day| day.temp.display(self.unit),
            )
    }
}
