//! # Paddock Dashboard
//!
//! The tab controllers behind the dashboard. Each tab is a pure function from
//! the current selection (year range plus the chosen drivers, constructors or
//! circuit) to a chart-ready view that the presentation layer can draw
//! without further computation.
//!
//! ## Failure Policy
//!
//! Controllers never fail. A missing or unparsable year bound falls back to
//! the default range, unknown names are ignored, and a chart with nothing to
//! plot is returned as `Chart::Empty` with a message for the user.
//!
//! ## Public API
//!
//! - `Dashboard`: owns the shared `DataStore` and the dashboard settings;
//!   exposes `options`, `overview`, `drivers`, `constructors` and `circuits`.
//! - `YearSelection`, `EntitySelection`: the user's filter state.
//! - `Chart` and friends: the serializable figure model.

use configuration::DashboardSettings;
use core_types::YearRange;
use data_store::DataStore;
use std::sync::Arc;

// Declare the modules that constitute this crate.
pub mod chart;
pub mod selection;
pub mod tabs;

// Re-export the key components to create a clean, public-facing API.
pub use chart::{Bar, BarChart, Chart, EmptyChart, LineChart, LineSeries, Orientation, PieChart, Point};
pub use selection::{EntitySelection, FALLBACK_YEARS, YearSelection};
pub use tabs::{CircuitView, EntrantView, OptionsView, OverviewView};

/// The dashboard's controllers, sharing one read-only dataset.
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: Arc<DataStore>,
    settings: DashboardSettings,
}

impl Dashboard {
    pub fn new(store: Arc<DataStore>, settings: DashboardSettings) -> Self {
        Self { store, settings }
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// `[last_season - lookback_years, last_season]`, the slider's initial position.
    pub fn default_years(&self) -> YearRange {
        match self.store.year_bounds() {
            Some(bounds) => YearRange::new(bounds.to - self.settings.lookback_years, bounds.to),
            None => FALLBACK_YEARS,
        }
    }

    /// Resolves the slider state against the default range.
    pub fn years(&self, selection: YearSelection) -> YearRange {
        selection.resolve(self.default_years())
    }
}
