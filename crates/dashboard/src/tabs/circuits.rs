use crate::chart::{BLUE, BarChart, Chart, RED, TEAL};
use crate::selection::{EntitySelection, YearSelection};
use crate::Dashboard;
use analytics::{tally_races, top_n};
use core_types::{ResultRow, YearRange};
use serde::Serialize;

/// Circuit leaderboard plus per-circuit winners and pole sitters.
#[derive(Debug, Clone, Serialize)]
pub struct CircuitView {
    pub years: YearRange,
    pub caption: String,
    /// The circuit the per-circuit charts were asked about, after applying the default.
    pub circuit: Option<String>,
    pub most_races_hosted: Chart,
    pub driver_wins: Chart,
    pub constructor_wins: Chart,
    pub driver_poles: Chart,
}

impl Dashboard {
    /// # Circuits tab
    pub fn circuits(&self, selection: YearSelection, circuit: &EntitySelection) -> CircuitView {
        let years = self.years(selection);
        let store = self.store();
        let settings = self.settings();
        let rows: Vec<&ResultRow> = store.rows_in(years).collect();
        let circuit = circuit
            .names(settings.default_circuit.as_slice())
            .first()
            .cloned();
        tracing::debug!(%years, ?circuit, "Computing circuits tab.");

        let n = settings.leaderboard_size;
        let most_races_hosted =
            BarChart::horizontal("Most Races Hosted by Circuit", "Circuit Name", "Number of Races")
                .color(BLUE)
                .ranking(top_n(
                    tally_races(rows.iter().copied(), |r| Some(r.circuit_id)),
                    n,
                    |id| store.circuit_name(*id).to_string(),
                ))
                .or_empty("No races in this period.");

        let Some(name) = circuit.clone() else {
            let prompt = "Please select a circuit from the dropdown.";
            return CircuitView {
                years,
                caption: years.caption(),
                circuit,
                most_races_hosted,
                driver_wins: Chart::empty("Top Drivers by Wins", prompt),
                constructor_wins: Chart::empty("Top Constructors by Wins", prompt),
                driver_poles: Chart::empty("Top Drivers by Poles", prompt),
            };
        };

        // An unknown circuit, or one that never hosted a race, leaves this empty.
        let venue = store.find_circuits(&name);
        let at_circuit: Vec<&ResultRow> = rows
            .iter()
            .copied()
            .filter(|r| venue.contains(&r.circuit_id))
            .collect();

        let n = settings.circuit_leaderboard_size;
        let no_winners = "No winners at this circuit in this period.";

        let driver_wins = BarChart::horizontal(
            format!("Top {n} Drivers by Wins at {name}"),
            "Driver",
            "Total Wins",
        )
        .color(BLUE)
        .ranking(top_n(
            tally_races(at_circuit.iter().copied(), |r| r.is_win().then_some(r.driver_id)),
            n,
            |id| store.driver_name(*id).to_string(),
        ))
        .or_empty(no_winners);

        let constructor_wins = BarChart::horizontal(
            format!("Top {n} Constructors by Wins at {name}"),
            "Constructor",
            "Total Wins",
        )
        .color(RED)
        .ranking(top_n(
            tally_races(at_circuit.iter().copied(), |r| r.is_win().then_some(r.constructor_id)),
            n,
            |id| store.constructor_name(*id).to_string(),
        ))
        .or_empty(no_winners);

        let driver_poles = BarChart::horizontal(
            format!("Top {n} Drivers by Poles at {name}"),
            "Driver",
            "Total Pole Positions",
        )
        .color(TEAL)
        .ranking(top_n(
            tally_races(at_circuit.iter().copied(), |r| r.is_pole().then_some(r.driver_id)),
            n,
            |id| store.driver_name(*id).to_string(),
        ))
        .or_empty("No pole positions at this circuit in this period.");

        CircuitView {
            years,
            caption: years.caption(),
            circuit,
            most_races_hosted,
            driver_wins,
            constructor_wins,
            driver_poles,
        }
    }
}
