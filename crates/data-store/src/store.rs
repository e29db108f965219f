use crate::error::DataStoreError;
use chrono::{DateTime, Utc};
use core_types::{
    Circuit, CircuitId, Constructor, ConstructorId, Driver, DriverId, Race, RaceId, RaceResult,
    ResultRow, YearRange,
};
use std::collections::{BTreeSet, HashMap, HashSet};

/// The raw, unjoined tables as they come out of the loader.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub races: Vec<Race>,
    pub drivers: Vec<Driver>,
    pub constructors: Vec<Constructor>,
    pub circuits: Vec<Circuit>,
    pub results: Vec<RaceResult>,
}

/// The immutable, joined race dataset.
///
/// Built once at startup; every query borrows from it. Result rows are kept
/// ordered by `(year, race_id)` so scans are deterministic.
#[derive(Debug)]
pub struct DataStore {
    races: HashMap<RaceId, Race>,
    drivers: HashMap<DriverId, Driver>,
    constructors: HashMap<ConstructorId, Constructor>,
    circuits: HashMap<CircuitId, Circuit>,
    rows: Vec<ResultRow>,
    driver_names: HashMap<String, Vec<DriverId>>,
    constructor_names: HashMap<String, Vec<ConstructorId>>,
    circuit_names: HashMap<String, Vec<CircuitId>>,
    loaded_at: DateTime<Utc>,
}

impl DataStore {
    /// Joins the tables, checking that every reference resolves.
    pub fn from_tables(tables: Tables) -> Result<Self, DataStoreError> {
        let mut circuits = index_by(tables.circuits, "circuit", |c| c.id)?;
        let races = index_by(tables.races, "race", |r| r.id)?;
        let drivers = index_by(tables.drivers, "driver", |d| d.id)?;
        let constructors = index_by(tables.constructors, "constructor", |c| c.id)?;

        for circuit in circuits.values_mut() {
            circuit.race_count = 0;
        }
        for race in races.values() {
            let circuit = circuits
                .get_mut(&race.circuit_id)
                .ok_or(DataStoreError::UnknownCircuit {
                    race: race.id,
                    circuit: race.circuit_id,
                })?;
            circuit.race_count += 1;
        }

        let mut rows = Vec::with_capacity(tables.results.len());
        for result in &tables.results {
            let race = races
                .get(&result.race_id)
                .ok_or(DataStoreError::UnknownRace(result.race_id))?;
            if !drivers.contains_key(&result.driver_id) {
                return Err(DataStoreError::UnknownDriver {
                    race: result.race_id,
                    driver: result.driver_id,
                });
            }
            if !constructors.contains_key(&result.constructor_id) {
                return Err(DataStoreError::UnknownConstructor {
                    race: result.race_id,
                    constructor: result.constructor_id,
                });
            }
            rows.push(ResultRow::join(result, race));
        }
        rows.sort_by_key(|row| (row.year, row.race_id));

        let driver_names = name_index(drivers.values().map(|d| (d.name.as_str(), d.id)));
        let constructor_names =
            name_index(constructors.values().map(|c| (c.name.as_str(), c.id)));
        let circuit_names = name_index(circuits.values().map(|c| (c.name.as_str(), c.id)));

        tracing::info!(
            races = races.len(),
            drivers = drivers.len(),
            constructors = constructors.len(),
            circuits = circuits.len(),
            results = rows.len(),
            "Data store built."
        );

        Ok(Self {
            races,
            drivers,
            constructors,
            circuits,
            rows,
            driver_names,
            constructor_names,
            circuit_names,
            loaded_at: Utc::now(),
        })
    }

    /// All joined result rows, ordered by year.
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// The joined result rows whose season falls inside `range`.
    pub fn rows_in(&self, range: YearRange) -> impl Iterator<Item = &ResultRow> + '_ {
        // Rows are sorted by year, so the matching block is contiguous.
        let start = self.rows.partition_point(|row| row.year < range.from);
        let end = self.rows.partition_point(|row| row.year <= range.to).max(start);
        self.rows[start..end].iter()
    }

    /// The first and last season with at least one result.
    pub fn year_bounds(&self) -> Option<YearRange> {
        let first = self.rows.first()?;
        let last = self.rows.last()?;
        Some(YearRange::new(first.year, last.year))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn race(&self, id: RaceId) -> Option<&Race> {
        self.races.get(&id)
    }

    pub fn driver(&self, id: DriverId) -> Option<&Driver> {
        self.drivers.get(&id)
    }

    pub fn constructor(&self, id: ConstructorId) -> Option<&Constructor> {
        self.constructors.get(&id)
    }

    pub fn circuit(&self, id: CircuitId) -> Option<&Circuit> {
        self.circuits.get(&id)
    }

    /// The host country of a circuit, or `""` for an unknown id.
    pub fn country_of(&self, id: CircuitId) -> &str {
        self.circuits.get(&id).map(|c| c.country.as_str()).unwrap_or("")
    }

    pub fn driver_name(&self, id: DriverId) -> &str {
        self.drivers.get(&id).map(|d| d.name.as_str()).unwrap_or("")
    }

    pub fn constructor_name(&self, id: ConstructorId) -> &str {
        self.constructors.get(&id).map(|c| c.name.as_str()).unwrap_or("")
    }

    pub fn circuit_name(&self, id: CircuitId) -> &str {
        self.circuits.get(&id).map(|c| c.name.as_str()).unwrap_or("")
    }

    /// Driver names that appear in at least one result, sorted and deduplicated.
    pub fn driver_names(&self) -> Vec<&str> {
        let ids: HashSet<DriverId> = self.rows.iter().map(|r| r.driver_id).collect();
        sorted_names(ids.into_iter().map(|id| self.driver_name(id)))
    }

    /// Constructor names that appear in at least one result, sorted and deduplicated.
    pub fn constructor_names(&self) -> Vec<&str> {
        let ids: HashSet<ConstructorId> = self.rows.iter().map(|r| r.constructor_id).collect();
        sorted_names(ids.into_iter().map(|id| self.constructor_name(id)))
    }

    /// Circuit names that hosted at least one race with results, sorted and deduplicated.
    pub fn circuit_names(&self) -> Vec<&str> {
        let ids: HashSet<CircuitId> = self.rows.iter().map(|r| r.circuit_id).collect();
        sorted_names(ids.into_iter().map(|id| self.circuit_name(id)))
    }

    /// Resolves display names to driver ids. Unknown names are skipped.
    pub fn find_drivers<S: AsRef<str>>(&self, names: &[S]) -> HashSet<DriverId> {
        resolve(&self.driver_names, names)
    }

    /// Resolves display names to constructor ids. Unknown names are skipped.
    pub fn find_constructors<S: AsRef<str>>(&self, names: &[S]) -> HashSet<ConstructorId> {
        resolve(&self.constructor_names, names)
    }

    /// Resolves a circuit name. Several ids come back only if the source
    /// data lists the same name twice.
    pub fn find_circuits(&self, name: &str) -> HashSet<CircuitId> {
        resolve(&self.circuit_names, &[name])
    }
}

fn index_by<T, K, F>(
    items: Vec<T>,
    table: &'static str,
    key: F,
) -> Result<HashMap<K, T>, DataStoreError>
where
    K: std::hash::Hash + Eq + Copy + std::fmt::Display,
    F: Fn(&T) -> K,
{
    let mut map = HashMap::with_capacity(items.len());
    for item in items {
        let id = key(&item);
        if map.insert(id, item).is_some() {
            return Err(DataStoreError::DuplicateId {
                table,
                id: id.to_string(),
            });
        }
    }
    Ok(map)
}

fn name_index<'a, K, I>(entries: I) -> HashMap<String, Vec<K>>
where
    K: Copy + Ord,
    I: Iterator<Item = (&'a str, K)>,
{
    let mut index: HashMap<String, Vec<K>> = HashMap::new();
    for (name, id) in entries {
        index.entry(name.to_string()).or_default().push(id);
    }
    for ids in index.values_mut() {
        ids.sort();
    }
    index
}

fn resolve<K, S>(index: &HashMap<String, Vec<K>>, names: &[S]) -> HashSet<K>
where
    K: Copy + std::hash::Hash + Eq,
    S: AsRef<str>,
{
    names
        .iter()
        .filter_map(|name| index.get(name.as_ref().trim()))
        .flatten()
        .copied()
        .collect()
}

fn sorted_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    names.collect::<BTreeSet<_>>().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{sample_store, sample_tables};

    #[test]
    fn test_circuit_race_count_is_derived() {
        let store = sample_store();
        let monza = store.find_circuits("Autodromo Nazionale di Monza");
        assert_eq!(monza.len(), 1);
        let id = *monza.iter().next().unwrap();
        assert_eq!(store.circuit(id).unwrap().race_count, 3);
        assert_eq!(store.country_of(id), "Italy");
    }

    #[test]
    fn test_rows_in_respects_bounds() {
        let store = sample_store();
        assert!(store.rows_in(YearRange::new(2019, 2019)).all(|r| r.year == 2019));
        assert_eq!(store.rows_in(YearRange::new(1900, 1901)).count(), 0);
        assert_eq!(store.rows_in(YearRange::new(2021, 2019)).count(), 0);
        assert_eq!(store.rows_in(YearRange::new(0, 3000)).count(), store.rows().len());
    }

    #[test]
    fn test_year_bounds() {
        let store = sample_store();
        assert_eq!(store.year_bounds(), Some(YearRange::new(2019, 2021)));

        let empty = DataStore::from_tables(Tables::default()).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.year_bounds(), None);
    }

    #[test]
    fn test_name_resolution_skips_unknown_names() {
        let store = sample_store();
        let ids = store.find_drivers(&["Lewis Hamilton", "Nobody", " Max Verstappen "]);
        assert_eq!(ids.len(), 2);
        assert!(store.find_constructors(&["Minardi"]).is_empty());
        assert!(store.find_circuits("Nowhere Ring").is_empty());
    }

    #[test]
    fn test_name_listings_are_sorted() {
        let store = sample_store();
        let names = store.driver_names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        // The idle circuit hosted no race with results.
        assert!(!store.circuit_names().contains(&"Idle Park"));
    }

    #[test]
    fn test_dangling_driver_is_rejected() {
        let mut tables = sample_tables();
        tables.results[0].driver_id = DriverId(9999);
        let err = DataStore::from_tables(tables).unwrap_err();
        assert!(matches!(
            err,
            DataStoreError::UnknownDriver { driver: DriverId(9999), .. }
        ));
    }

    #[test]
    fn test_dangling_race_and_circuit_are_rejected() {
        let mut tables = sample_tables();
        tables.results[0].race_id = RaceId(9999);
        assert!(matches!(
            DataStore::from_tables(tables).unwrap_err(),
            DataStoreError::UnknownRace(RaceId(9999))
        ));

        let mut tables = sample_tables();
        tables.races[0].circuit_id = CircuitId(9999);
        assert!(matches!(
            DataStore::from_tables(tables).unwrap_err(),
            DataStoreError::UnknownCircuit { .. }
        ));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut tables = sample_tables();
        let copy = tables.constructors[0].clone();
        tables.constructors.push(copy);
        assert!(matches!(
            DataStore::from_tables(tables).unwrap_err(),
            DataStoreError::DuplicateId { table: "constructor", .. }
        ));
    }
}
