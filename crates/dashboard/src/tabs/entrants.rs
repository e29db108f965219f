use crate::chart::{BarChart, Chart, LineChart, LineSeries, Point, TEAL};
use crate::selection::{EntitySelection, YearSelection};
use crate::Dashboard;
use analytics::{YearValue, cumulative_wins, season_points, tally, top_n};
use core_types::{ConstructorId, DriverId, ResultRow, YearRange};
use data_store::DataStore;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

/// The Drivers and Constructors tabs share this layout.
#[derive(Debug, Clone, Serialize)]
pub struct EntrantView {
    pub years: YearRange,
    pub caption: String,
    /// The names the line charts were asked to plot, after applying defaults.
    pub selected: Vec<String>,
    pub most_wins: Chart,
    pub most_podiums: Chart,
    pub cumulative_wins: Chart,
    pub season_points: Chart,
}

/// Whatever a result row can be attributed to on an entrant tab.
trait Entrant: Copy + Ord + Hash {
    /// Lower-case noun used in user messages.
    const NOUN: &'static str;
    /// Title-case noun used in chart titles and axes.
    const TITLE: &'static str;

    fn of(row: &ResultRow) -> Self;
    fn name(self, store: &DataStore) -> &str;
    fn find(store: &DataStore, names: &[String]) -> HashSet<Self>;
}

impl Entrant for DriverId {
    const NOUN: &'static str = "driver";
    const TITLE: &'static str = "Driver";

    fn of(row: &ResultRow) -> Self {
        row.driver_id
    }

    fn name(self, store: &DataStore) -> &str {
        store.driver_name(self)
    }

    fn find(store: &DataStore, names: &[String]) -> HashSet<Self> {
        store.find_drivers(names)
    }
}

impl Entrant for ConstructorId {
    const NOUN: &'static str = "constructor";
    const TITLE: &'static str = "Constructor";

    fn of(row: &ResultRow) -> Self {
        row.constructor_id
    }

    fn name(self, store: &DataStore) -> &str {
        store.constructor_name(self)
    }

    fn find(store: &DataStore, names: &[String]) -> HashSet<Self> {
        store.find_constructors(names)
    }
}

impl Dashboard {
    /// # Drivers tab
    pub fn drivers(&self, years: YearSelection, selection: &EntitySelection) -> EntrantView {
        let names = selection.names(&self.settings().default_drivers);
        self.entrant_tab::<DriverId>(years, names)
    }

    /// # Constructors tab
    pub fn constructors(&self, years: YearSelection, selection: &EntitySelection) -> EntrantView {
        let names = selection.names(&self.settings().default_constructors);
        self.entrant_tab::<ConstructorId>(years, names)
    }

    fn entrant_tab<E: Entrant>(&self, selection: YearSelection, names: &[String]) -> EntrantView {
        let years = self.years(selection);
        let store = self.store();
        let n = self.settings().leaderboard_size;
        let rows: Vec<&ResultRow> = store.rows_in(years).collect();
        tracing::debug!(%years, tab = E::TITLE, ?names, "Computing entrant tab.");

        let most_wins = BarChart::horizontal(
            format!("Most Races Won by {}", E::TITLE),
            E::TITLE,
            "Number of Wins",
        )
        .ranking(top_n(
            tally(rows.iter().copied(), |r| r.is_win().then(|| E::of(r))),
            n,
            |e| e.name(store).to_string(),
        ))
        .or_empty("No wins in this period.");

        let most_podiums = BarChart::horizontal(
            format!("Most Podiums by {}", E::TITLE),
            E::TITLE,
            "Number of Podiums",
        )
        .color(TEAL)
        .ranking(top_n(
            tally(rows.iter().copied(), |r| r.is_podium().then(|| E::of(r))),
            n,
            |e| e.name(store).to_string(),
        ))
        .or_empty("No podiums in this period.");

        let wins_title = format!("Cumulative Wins Over Time for Selected {}s", E::TITLE);
        let points_title = format!("Points per Season for Selected {}s", E::TITLE);

        let (cumulative, seasonal) = if names.is_empty() {
            let prompt = format!("Please select a {} from the dropdown.", E::NOUN);
            (Chart::empty(wins_title, &prompt), Chart::empty(points_title, prompt))
        } else {
            let selected = E::find(store, names);
            let key = |r: &ResultRow| {
                let e = E::of(r);
                selected.contains(&e).then_some(e)
            };

            let wins = LineChart {
                series: line_series(store, cumulative_wins(rows.iter().copied(), key), f64::from),
                ..LineChart::new(wins_title, "Cumulative Wins")
            }
            .or_empty(&format!("No wins for selected {}(s) in this period.", E::NOUN));

            let points = LineChart {
                series: line_series(store, season_points(rows.iter().copied(), key), |p| {
                    p.to_f64().unwrap_or_default()
                }),
                ..LineChart::new(points_title, "Seasonal Points")
            }
            .or_empty(&format!("No points for selected {}(s) in this period.", E::NOUN));

            (wins, points)
        };

        EntrantView {
            years,
            caption: years.caption(),
            selected: names.to_vec(),
            most_wins,
            most_podiums,
            cumulative_wins: cumulative,
            season_points: seasonal,
        }
    }
}

/// One line per entrant, ordered by name.
fn line_series<E, M, F>(
    store: &DataStore,
    series: BTreeMap<E, Vec<YearValue<M>>>,
    to_f64: F,
) -> Vec<LineSeries>
where
    E: Entrant,
    M: Copy,
    F: Fn(M) -> f64,
{
    let mut lines: Vec<(String, E, Vec<Point>)> = series
        .into_iter()
        .map(|(e, values)| {
            let points = values
                .into_iter()
                .map(|v| Point {
                    year: v.year,
                    value: to_f64(v.value),
                })
                .collect();
            (e.name(store).to_string(), e, points)
        })
        .collect();
    lines.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    lines
        .into_iter()
        .map(|(name, _, points)| LineSeries { name, points })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::chart::{Chart, Point};
    use crate::selection::{EntitySelection, YearSelection};
    use crate::tabs::test_support::sample_dashboard;

    fn names(list: &[&str]) -> EntitySelection {
        EntitySelection::Names(list.iter().map(|s| s.to_string()).collect())
    }

    fn line(chart: &Chart, name: &str) -> Vec<(i32, f64)> {
        let Chart::Line(line) = chart else {
            panic!("expected a line chart, got {chart:?}");
        };
        line.series
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.points.iter().map(|&Point { year, value }| (year, value)).collect())
            .unwrap_or_default()
    }

    fn bar_labels(chart: &Chart) -> Vec<(String, f64)> {
        let Chart::Bar(bar) = chart else {
            panic!("expected a bar chart, got {chart:?}");
        };
        bar.bars.iter().map(|b| (b.label.clone(), b.value)).collect()
    }

    #[test]
    fn test_driver_leaderboards() {
        let view = sample_dashboard().drivers(YearSelection::default(), &EntitySelection::Default);
        assert_eq!(
            bar_labels(&view.most_wins),
            vec![
                ("Lewis Hamilton".to_string(), 3.0),
                ("Max Verstappen".to_string(), 2.0),
                ("Charles Leclerc".to_string(), 1.0),
            ]
        );
        assert_eq!(
            bar_labels(&view.most_podiums),
            vec![
                ("Lewis Hamilton".to_string(), 6.0),
                ("Valtteri Bottas".to_string(), 5.0),
                ("Charles Leclerc".to_string(), 4.0),
                ("Max Verstappen".to_string(), 3.0),
            ]
        );
    }

    #[test]
    fn test_driver_cumulative_wins_and_points() {
        let view = sample_dashboard().drivers(
            YearSelection::default(),
            &names(&["Lewis Hamilton", "Max Verstappen", "Valtteri Bottas"]),
        );
        assert_eq!(
            line(&view.cumulative_wins, "Lewis Hamilton"),
            vec![(2019, 1.0), (2020, 2.0), (2021, 3.0)]
        );
        assert_eq!(
            line(&view.cumulative_wins, "Max Verstappen"),
            vec![(2020, 1.0), (2021, 2.0)]
        );
        // Selected, but never won.
        assert!(line(&view.cumulative_wins, "Valtteri Bottas").is_empty());

        assert_eq!(
            line(&view.season_points, "Max Verstappen"),
            vec![(2019, 12.0), (2020, 43.0), (2021, 12.5)]
        );
        let Chart::Line(points) = &view.season_points else {
            panic!("expected a line chart");
        };
        let order: Vec<_> = points.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(order, ["Lewis Hamilton", "Max Verstappen", "Valtteri Bottas"]);
    }

    #[test]
    fn test_default_selection_ignores_missing_names() {
        // Defaults name two drivers absent from the sample.
        let view = sample_dashboard().drivers(YearSelection::default(), &EntitySelection::Default);
        assert_eq!(view.selected.len(), 3);
        assert_eq!(line(&view.cumulative_wins, "Lewis Hamilton").len(), 3);
        assert!(line(&view.cumulative_wins, "Michael Schumacher").is_empty());
    }

    #[test]
    fn test_cleared_selection_prompts_user() {
        let view = sample_dashboard().drivers(YearSelection::default(), &names(&[]));
        match &view.cumulative_wins {
            Chart::Empty(empty) => {
                assert_eq!(empty.message, "Please select a driver from the dropdown.")
            }
            other => panic!("expected an empty chart, got {other:?}"),
        }
        assert!(view.season_points.is_empty());
        // The leaderboards do not depend on the selection.
        assert!(!view.most_wins.is_empty());
    }

    #[test]
    fn test_unknown_or_winless_selection_is_empty() {
        let view = sample_dashboard().drivers(YearSelection::default(), &names(&["Nobody"]));
        match &view.cumulative_wins {
            Chart::Empty(empty) => {
                assert_eq!(empty.message, "No wins for selected driver(s) in this period.")
            }
            other => panic!("expected an empty chart, got {other:?}"),
        }

        let view = sample_dashboard().drivers(
            YearSelection::new(Some(2019), Some(2019)),
            &names(&["Max Verstappen"]),
        );
        assert!(view.cumulative_wins.is_empty());
        assert_eq!(line(&view.season_points, "Max Verstappen"), vec![(2019, 12.0)]);
    }

    #[test]
    fn test_constructor_tab() {
        let view = sample_dashboard()
            .constructors(YearSelection::default(), &EntitySelection::Default);
        assert_eq!(view.most_wins.title(), "Most Races Won by Constructor");
        assert_eq!(
            bar_labels(&view.most_podiums),
            vec![
                ("Mercedes".to_string(), 11.0),
                ("Ferrari".to_string(), 4.0),
                ("Red Bull".to_string(), 3.0),
            ]
        );
        assert_eq!(
            line(&view.cumulative_wins, "Mercedes"),
            vec![(2019, 1.0), (2020, 2.0), (2021, 3.0)]
        );
        assert_eq!(
            line(&view.season_points, "Ferrari"),
            vec![(2019, 40.0), (2020, 12.0), (2021, 25.5)]
        );

        let cleared = sample_dashboard().constructors(YearSelection::default(), &names(&[]));
        match &cleared.season_points {
            Chart::Empty(empty) => {
                assert_eq!(empty.message, "Please select a constructor from the dropdown.")
            }
            other => panic!("expected an empty chart, got {other:?}"),
        }
    }
}
