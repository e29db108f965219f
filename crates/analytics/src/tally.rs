use core_types::ResultRow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Counts rows per key. Rows for which `key` returns `None` are skipped.
///
/// Use this for outcomes that can happen more than once per race for the
/// same key, such as a constructor's podiums.
pub fn tally<'a, K, I, F>(rows: I, key: F) -> HashMap<K, u32>
where
    K: Hash + Eq,
    I: IntoIterator<Item = &'a ResultRow>,
    F: Fn(&ResultRow) -> Option<K>,
{
    let mut counts = HashMap::new();
    for row in rows {
        if let Some(k) = key(row) {
            *counts.entry(k).or_insert(0) += 1;
        }
    }
    counts
}

/// Counts distinct races per key. Rows for which `key` returns `None` are skipped.
///
/// Every race contributes one row per starter, so anything counted "per race"
/// (races hosted, races held in a season) goes through here.
pub fn tally_races<'a, K, I, F>(rows: I, key: F) -> HashMap<K, u32>
where
    K: Hash + Eq + Clone,
    I: IntoIterator<Item = &'a ResultRow>,
    F: Fn(&ResultRow) -> Option<K>,
{
    let mut seen = HashSet::new();
    let mut counts = HashMap::new();
    for row in rows {
        let Some(k) = key(row) else { continue };
        if seen.insert((k.clone(), row.race_id)) {
            *counts.entry(k).or_insert(0) += 1;
        }
    }
    counts
}

/// Number of distinct keys among the rows.
pub fn count_distinct<'a, K, I, F>(rows: I, key: F) -> usize
where
    K: Hash + Eq,
    I: IntoIterator<Item = &'a ResultRow>,
    F: Fn(&ResultRow) -> K,
{
    rows.into_iter().map(key).collect::<HashSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{CircuitId, ConstructorId, DriverId, RaceId};
    use rust_decimal::Decimal;

    fn row(race: i64, year: i32, driver: i64, constructor: i64, position: u32) -> ResultRow {
        ResultRow {
            race_id: RaceId(race),
            year,
            circuit_id: CircuitId(1),
            driver_id: DriverId(driver),
            constructor_id: ConstructorId(constructor),
            position: Some(position),
            grid: None,
            points: Decimal::ZERO,
        }
    }

    #[test]
    fn test_tally_counts_rows() {
        // One-two finish for constructor 7 in race 1.
        let rows = vec![row(1, 2000, 1, 7, 1), row(1, 2000, 2, 7, 2), row(2, 2000, 1, 7, 5)];
        let podiums = tally(&rows, |r| r.is_podium().then_some(r.constructor_id));
        assert_eq!(podiums[&ConstructorId(7)], 2);
    }

    #[test]
    fn test_tally_races_counts_each_race_once() {
        let rows = vec![row(1, 2000, 1, 7, 1), row(1, 2000, 2, 8, 2), row(2, 2001, 1, 7, 1)];
        let races_per_year = tally_races(&rows, |r| Some(r.year));
        assert_eq!(races_per_year[&2000], 1);
        assert_eq!(races_per_year[&2001], 1);
    }

    #[test]
    fn test_empty_input() {
        let rows: Vec<ResultRow> = Vec::new();
        assert!(tally(&rows, |r| Some(r.driver_id)).is_empty());
        assert!(tally_races(&rows, |r| Some(r.driver_id)).is_empty());
        assert_eq!(count_distinct(&rows, |r| r.race_id), 0);
    }

    #[test]
    fn test_count_distinct() {
        let rows = vec![row(1, 2000, 1, 7, 1), row(1, 2000, 2, 8, 2), row(2, 2001, 1, 7, 1)];
        assert_eq!(count_distinct(&rows, |r| r.race_id), 2);
        assert_eq!(count_distinct(&rows, |r| r.constructor_id), 2);
    }
}
