//! Weather list screen: load-cycle state machine and display surface seam
//!
//! The screen drives one load cycle per trigger. Initial load, refresh, and
//! retry after a failure are all the same full-batch restart; a completed
//! cycle renders exactly once, and a failed cycle shows one error notice
//! while keeping the previously rendered rows on screen.

use tracing::{debug, info};

use crate::api::CityWeatherSource;
use crate::error::SimpleWeatherError;
use crate::loader::BatchLoader;
use crate::models::CityWeather;

/// Load-cycle state of the list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No cycle running; last cycle (if any) completed
    Idle,
    /// A cycle is in flight
    Loading,
    /// Last cycle failed; a retry restarts the whole batch
    Failed,
}

/// Outgoing screen event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    /// A row was activated; carries the selected city's name
    RowActivated { city: String },
}

/// Rendering seam consumed by the screen
pub trait DisplaySurface {
    /// Show or hide the busy indicator
    fn set_busy(&mut self, busy: bool);
    /// Render the complete sorted city list, one row per city
    fn render(&mut self, cities: &[CityWeather]);
    /// Present a dismissible failure notice with a retry affordance
    fn show_error(&mut self, notice: &str);
}

/// List screen over a fixed city batch
pub struct WeatherListScreen<S, D> {
    loader: BatchLoader<S>,
    batch: Vec<String>,
    surface: D,
    state: LoadState,
    rows: Vec<CityWeather>,
}

impl<S: CityWeatherSource, D: DisplaySurface> WeatherListScreen<S, D> {
    /// Create a new screen over the given loader, batch, and surface
    pub fn new(loader: BatchLoader<S>, batch: Vec<String>, surface: D) -> Self {
        Self {
            loader,
            batch,
            surface,
            state: LoadState::Idle,
            rows: Vec::new(),
        }
    }

    /// Current load state
    #[must_use]
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Rows from the last completed cycle
    #[must_use]
    pub fn rows(&self) -> &[CityWeather] {
        &self.rows
    }

    /// Access the display surface (used by callers that own richer surfaces)
    #[must_use]
    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Initial load trigger
    pub async fn load(&mut self) -> Result<(), SimpleWeatherError> {
        self.run_cycle().await
    }

    /// Refresh trigger; identical to the initial load
    pub async fn refresh(&mut self) -> Result<(), SimpleWeatherError> {
        self.run_cycle().await
    }

    /// Retry after a failure; restarts every fetch in the batch
    pub async fn retry(&mut self) -> Result<(), SimpleWeatherError> {
        self.run_cycle().await
    }

    async fn run_cycle(&mut self) -> Result<(), SimpleWeatherError> {
        debug!("Starting load cycle for {} cities", self.batch.len());
        self.state = LoadState::Loading;
        self.surface.set_busy(true);

        match self.loader.load(&self.batch).await {
            Ok(cities) => {
                self.surface.set_busy(false);
                self.surface.render(&cities);
                self.rows = cities;
                self.state = LoadState::Idle;
                info!("Rendered {} cities", self.rows.len());
                Ok(())
            }
            Err(err) => {
                self.surface.set_busy(false);
                self.surface.show_error(&err.user_message());
                self.state = LoadState::Failed;
                Err(err)
            }
        }
    }

    /// Report row activation, carrying the selected city's name.
    /// Returns `None` when the index is out of range.
    pub fn activate_row(&self, index: usize) -> Option<ScreenEvent> {
        self.rows.get(index).map(|city| ScreenEvent::RowActivated {
            city: city.name.clone(),
        })
    }
}
