use crate::chart::{BLUE, Bar, BarChart, Chart, PieChart, TEAL};
use crate::selection::YearSelection;
use crate::Dashboard;
use analytics::{Kpis, shares, tally, tally_races, top_n};
use core_types::{ResultRow, YearRange};
use serde::Serialize;

const NO_DATA: &str = "No data for the selected period.";

/// Season-wide KPIs and leaderboards.
#[derive(Debug, Clone, Serialize)]
pub struct OverviewView {
    pub years: YearRange,
    pub caption: String,
    pub kpis: Kpis,
    pub races_per_season: Chart,
    pub races_by_country: Chart,
    pub constructor_nationality_wins: Chart,
    pub driver_nationality_wins: Chart,
    pub driver_poles: Chart,
    pub constructor_poles: Chart,
}

impl Dashboard {
    /// # Overview tab
    pub fn overview(&self, selection: YearSelection) -> OverviewView {
        let years = self.years(selection);
        let store = self.store();
        let n = self.settings().leaderboard_size;
        let rows: Vec<&ResultRow> = store.rows_in(years).collect();
        tracing::debug!(%years, rows = rows.len(), "Computing overview tab.");

        let kpis = Kpis::compute(rows.iter().copied(), |circuit| store.country_of(circuit));

        let mut seasons: Vec<(i32, u32)> = tally_races(rows.iter().copied(), |r| Some(r.year))
            .into_iter()
            .collect();
        seasons.sort_unstable();
        let races_per_season = BarChart::vertical("Total Races Each Season", "Year", "Number of Races")
            .bars(
                seasons
                    .into_iter()
                    .map(|(year, races)| Bar {
                        label: year.to_string(),
                        value: f64::from(races),
                    })
                    .collect(),
            )
            .or_empty(NO_DATA);

        let races_by_country = BarChart::horizontal(
            format!("Top {n} Host Countries"),
            "Country",
            "Number of Races",
        )
        .ranking(top_n(
            tally_races(rows.iter().copied(), |r| Some(store.country_of(r.circuit_id))),
            n,
            |country| country.to_string(),
        ))
        .or_empty(NO_DATA);

        let constructor_nationality_wins = PieChart {
            title: "Win % by Constructor Nationality".to_string(),
            slices: shares(
                tally(rows.iter().copied(), |r| {
                    r.is_win()
                        .then(|| store.constructor(r.constructor_id))
                        .flatten()
                        .map(|c| c.nationality.as_str())
                }),
                |nationality| nationality.to_string(),
            ),
        }
        .or_empty(NO_DATA);

        let driver_nationality_wins = BarChart::horizontal(
            format!("Top {n} Wins by Driver Nationality"),
            "Nationality",
            "Total Wins",
        )
        .color(TEAL)
        .ranking(top_n(
            tally(rows.iter().copied(), |r| {
                r.is_win()
                    .then(|| store.driver(r.driver_id))
                    .flatten()
                    .map(|d| d.nationality.as_str())
            }),
            n,
            |nationality| nationality.to_string(),
        ))
        .or_empty(NO_DATA);

        let driver_poles =
            BarChart::horizontal("Most Pole Positions by Driver", "Driver", "Number of Poles")
                .color(BLUE)
                .ranking(top_n(
                    tally(rows.iter().copied(), |r| r.is_pole().then_some(r.driver_id)),
                    n,
                    |id| store.driver_name(*id).to_string(),
                ))
                .or_empty(NO_DATA);

        let constructor_poles = BarChart::horizontal(
            "Most Pole Positions by Constructor",
            "Constructor",
            "Number of Poles",
        )
        .color(BLUE)
        .ranking(top_n(
            tally(rows.iter().copied(), |r| r.is_pole().then_some(r.constructor_id)),
            n,
            |id| store.constructor_name(*id).to_string(),
        ))
        .or_empty(NO_DATA);

        OverviewView {
            years,
            caption: years.caption(),
            kpis,
            races_per_season,
            races_by_country,
            constructor_nationality_wins,
            driver_nationality_wins,
            driver_poles,
            constructor_poles,
        }
    }
}
