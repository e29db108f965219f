use crate::tally::count_distinct;
use core_types::{CircuitId, ResultRow};
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// The headline numbers shown above the overview tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpis {
    pub races: usize,
    pub drivers: usize,
    pub constructors: usize,
    pub countries: usize,
}

impl Kpis {
    /// Computes every KPI in one pass over `rows`.
    ///
    /// `country_of` maps a circuit to its host country; the data store owns
    /// that lookup.
    pub fn compute<'a, I, C, F>(rows: I, country_of: F) -> Self
    where
        I: IntoIterator<Item = &'a ResultRow>,
        C: Hash + Eq,
        F: Fn(CircuitId) -> C,
    {
        let rows: Vec<&ResultRow> = rows.into_iter().collect();
        Self {
            races: count_distinct(rows.iter().copied(), |r| r.race_id),
            drivers: count_distinct(rows.iter().copied(), |r| r.driver_id),
            constructors: count_distinct(rows.iter().copied(), |r| r.constructor_id),
            countries: count_distinct(rows.iter().copied(), |r| country_of(r.circuit_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{ConstructorId, DriverId, RaceId};
    use rust_decimal::Decimal;

    fn row(race: i64, circuit: i64, driver: i64, constructor: i64) -> ResultRow {
        ResultRow {
            race_id: RaceId(race),
            year: 2010,
            circuit_id: CircuitId(circuit),
            driver_id: DriverId(driver),
            constructor_id: ConstructorId(constructor),
            position: None,
            grid: None,
            points: Decimal::ZERO,
        }
    }

    #[test]
    fn test_kpis_count_distinct_entities() {
        let rows = vec![row(1, 10, 1, 5), row(1, 10, 2, 6), row(2, 11, 1, 5), row(3, 12, 3, 5)];
        // Circuits 10 and 11 share a country.
        let kpis = Kpis::compute(&rows, |c| if c.0 == 12 { "Monaco" } else { "Italy" });
        assert_eq!(
            kpis,
            Kpis {
                races: 3,
                drivers: 3,
                constructors: 2,
                countries: 2,
            }
        );
    }

    #[test]
    fn test_empty_rows_give_zero_kpis() {
        let rows: Vec<ResultRow> = Vec::new();
        assert_eq!(Kpis::compute(&rows, |c| c), Kpis::default());
    }
}
