use core_types::ResultRow;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::AddAssign;

/// A single point of a per-season series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearValue<M> {
    pub year: i32,
    pub value: M,
}

/// Sums `value` per key and season.
///
/// Rows for which `key` or `value` returns `None` are skipped, so a season
/// only appears for a key when at least one row contributed to it.
pub fn yearly_totals<'a, K, M, I, F, V>(rows: I, key: F, value: V) -> BTreeMap<K, BTreeMap<i32, M>>
where
    K: Ord,
    M: AddAssign + Default,
    I: IntoIterator<Item = &'a ResultRow>,
    F: Fn(&ResultRow) -> Option<K>,
    V: Fn(&ResultRow) -> Option<M>,
{
    let mut totals: BTreeMap<K, BTreeMap<i32, M>> = BTreeMap::new();
    for row in rows {
        let (Some(k), Some(v)) = (key(row), value(row)) else {
            continue;
        };
        *totals.entry(k).or_default().entry(row.year).or_default() += v;
    }
    totals
}

/// Running win total per key, one point per season with at least one win.
///
/// A key with no wins in `rows` does not appear in the result.
pub fn cumulative_wins<'a, K, I, F>(rows: I, key: F) -> BTreeMap<K, Vec<YearValue<u32>>>
where
    K: Ord,
    I: IntoIterator<Item = &'a ResultRow>,
    F: Fn(&ResultRow) -> Option<K>,
{
    yearly_totals(rows, key, |r| r.is_win().then_some(1u32))
        .into_iter()
        .map(|(k, per_year)| {
            let mut running = 0;
            let points = per_year
                .into_iter()
                .map(|(year, wins)| {
                    running += wins;
                    YearValue {
                        year,
                        value: running,
                    }
                })
                .collect();
            (k, points)
        })
        .collect()
}

/// Points scored per key and season, for every season with a result.
pub fn season_points<'a, K, I, F>(rows: I, key: F) -> BTreeMap<K, Vec<YearValue<Decimal>>>
where
    K: Ord,
    I: IntoIterator<Item = &'a ResultRow>,
    F: Fn(&ResultRow) -> Option<K>,
{
    yearly_totals(rows, key, |r| Some(r.points))
        .into_iter()
        .map(|(k, per_year)| {
            let points = per_year
                .into_iter()
                .map(|(year, value)| YearValue { year, value })
                .collect();
            (k, points)
        })
        .collect()
}
