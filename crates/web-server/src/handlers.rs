use crate::{error::AppError, AppState};
use axum::{
    extract::{Query, State},
    http::Uri,
    Json,
};
use dashboard::{
    CircuitView, EntitySelection, EntrantView, OptionsView, OverviewView, YearSelection,
};
use serde::Deserialize;
use std::sync::Arc;

/// The dashboard's filter state, as sent by the browser.
///
/// Every field is kept as raw text: a value that fails to parse degrades to
/// the default view instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    /// Comma-separated driver names.
    pub drivers: Option<String>,
    /// Comma-separated constructor names.
    pub constructors: Option<String>,
    pub circuit: Option<String>,
}

impl DashboardQuery {
    fn years(&self) -> YearSelection {
        YearSelection::from_params(self.from.as_deref(), self.to.as_deref())
    }
}

/// # GET /api/options
/// Dropdown contents, slider bounds and default selections.
pub async fn get_options(State(state): State<Arc<AppState>>) -> Json<OptionsView> {
    Json(state.dashboard.options())
}

/// # GET /api/overview?from&to
pub async fn get_overview(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> Json<OverviewView> {
    Json(state.dashboard.overview(query.years()))
}

/// # GET /api/drivers?from&to&drivers
pub async fn get_drivers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> Json<EntrantView> {
    let selection = EntitySelection::from_param(query.drivers.as_deref());
    Json(state.dashboard.drivers(query.years(), &selection))
}

/// # GET /api/constructors?from&to&constructors
pub async fn get_constructors(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> Json<EntrantView> {
    let selection = EntitySelection::from_param(query.constructors.as_deref());
    Json(state.dashboard.constructors(query.years(), &selection))
}

/// # GET /api/circuits?from&to&circuit
pub async fn get_circuits(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> Json<CircuitView> {
    let selection = EntitySelection::single(query.circuit.as_deref());
    Json(state.dashboard.circuits(query.years(), &selection))
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
