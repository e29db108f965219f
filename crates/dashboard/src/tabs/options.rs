use crate::Dashboard;
use chrono::{DateTime, Utc};
use core_types::YearRange;
use serde::Serialize;

/// Everything the presentation layer needs to build its filter widgets.
#[derive(Debug, Clone, Serialize)]
pub struct OptionsView {
    /// First and last season in the dataset; `None` when it is empty.
    pub bounds: Option<YearRange>,
    pub default_years: YearRange,
    pub drivers: Vec<String>,
    pub constructors: Vec<String>,
    pub circuits: Vec<String>,
    pub default_drivers: Vec<String>,
    pub default_constructors: Vec<String>,
    pub default_circuit: Option<String>,
    pub loaded_at: DateTime<Utc>,
}

impl Dashboard {
    /// Dropdown contents and slider bounds.
    pub fn options(&self) -> OptionsView {
        let store = self.store();
        let settings = self.settings();
        let owned = |names: Vec<&str>| names.into_iter().map(str::to_string).collect::<Vec<_>>();

        OptionsView {
            bounds: store.year_bounds(),
            default_years: self.default_years(),
            drivers: owned(store.driver_names()),
            constructors: owned(store.constructor_names()),
            circuits: owned(store.circuit_names()),
            default_drivers: settings.default_drivers.clone(),
            default_constructors: settings.default_constructors.clone(),
            default_circuit: settings.default_circuit.clone(),
            loaded_at: store.loaded_at(),
        }
    }
}
