//! A tiny three-season dataset for tests.
//!
//! Six races, two per season from 2019 to 2021, alternating between Monza
//! and Silverstone. A third circuit exists but never hosted a race.
//!
//! | race | year | circuit     | P1         | pole       |
//! |------|------|-------------|------------|------------|
//! | 101  | 2019 | Monza       | Leclerc    | Leclerc    |
//! | 102  | 2019 | Silverstone | Hamilton   | Bottas     |
//! | 201  | 2020 | Monza       | Hamilton   | Hamilton   |
//! | 202  | 2020 | Silverstone | Verstappen | Hamilton   |
//! | 301  | 2021 | Monza       | Verstappen | Verstappen |
//! | 302  | 2021 | Silverstone | Hamilton   | Verstappen |

use crate::store::{DataStore, Tables};
use core_types::{
    Circuit, CircuitId, Constructor, ConstructorId, Driver, DriverId, Race, RaceId, RaceResult,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const HAMILTON: DriverId = DriverId(1);
pub const VERSTAPPEN: DriverId = DriverId(830);
pub const LECLERC: DriverId = DriverId(844);
pub const BOTTAS: DriverId = DriverId(822);

pub const MERCEDES: ConstructorId = ConstructorId(131);
pub const RED_BULL: ConstructorId = ConstructorId(9);
pub const FERRARI: ConstructorId = ConstructorId(6);

pub const MONZA: CircuitId = CircuitId(14);
pub const SILVERSTONE: CircuitId = CircuitId(9);
pub const IDLE_PARK: CircuitId = CircuitId(99);

/// The raw tables, for tests that need to corrupt them.
pub fn sample_tables() -> Tables {
    let circuits = vec![
        circuit(MONZA, "Autodromo Nazionale di Monza", "Italy"),
        circuit(SILVERSTONE, "Silverstone Circuit", "UK"),
        circuit(IDLE_PARK, "Idle Park", "Nowhere"),
    ];
    let drivers = vec![
        driver(HAMILTON, "Lewis Hamilton", "British"),
        driver(VERSTAPPEN, "Max Verstappen", "Dutch"),
        driver(LECLERC, "Charles Leclerc", "Monegasque"),
        driver(BOTTAS, "Valtteri Bottas", "Finnish"),
    ];
    let constructors = vec![
        constructor(MERCEDES, "Mercedes", "German"),
        constructor(RED_BULL, "Red Bull", "Austrian"),
        constructor(FERRARI, "Ferrari", "Italian"),
    ];
    let races = vec![
        race(101, 2019, MONZA, "Italian Grand Prix"),
        race(102, 2019, SILVERSTONE, "British Grand Prix"),
        race(201, 2020, MONZA, "Italian Grand Prix"),
        race(202, 2020, SILVERSTONE, "British Grand Prix"),
        race(301, 2021, MONZA, "Italian Grand Prix"),
        race(302, 2021, SILVERSTONE, "British Grand Prix"),
    ];
    let results = vec![
        result(101, LECLERC, FERRARI, Some(1), Some(1), dec!(25)),
        result(101, HAMILTON, MERCEDES, Some(2), Some(3), dec!(18)),
        result(101, BOTTAS, MERCEDES, Some(3), Some(2), dec!(15)),
        result(101, VERSTAPPEN, RED_BULL, None, Some(19), dec!(0)),
        result(102, HAMILTON, MERCEDES, Some(1), Some(2), dec!(26)),
        result(102, BOTTAS, MERCEDES, Some(2), Some(1), dec!(18)),
        result(102, LECLERC, FERRARI, Some(3), Some(3), dec!(15)),
        result(102, VERSTAPPEN, RED_BULL, Some(4), Some(4), dec!(12)),
        result(201, HAMILTON, MERCEDES, Some(1), Some(1), dec!(25)),
        result(201, VERSTAPPEN, RED_BULL, Some(2), Some(3), dec!(18)),
        result(201, BOTTAS, MERCEDES, Some(3), Some(2), dec!(15)),
        result(201, LECLERC, FERRARI, None, Some(5), dec!(0)),
        result(202, VERSTAPPEN, RED_BULL, Some(1), Some(4), dec!(25)),
        result(202, HAMILTON, MERCEDES, Some(2), Some(1), dec!(19)),
        result(202, BOTTAS, MERCEDES, Some(3), Some(2), dec!(15)),
        result(202, LECLERC, FERRARI, Some(4), Some(3), dec!(12)),
        result(301, VERSTAPPEN, RED_BULL, Some(1), Some(1), dec!(12.5)),
        result(301, HAMILTON, MERCEDES, Some(2), Some(2), dec!(9)),
        result(301, LECLERC, FERRARI, Some(3), Some(3), dec!(7.5)),
        result(301, BOTTAS, MERCEDES, None, Some(4), dec!(0)),
        result(302, HAMILTON, MERCEDES, Some(1), Some(2), dec!(25)),
        result(302, LECLERC, FERRARI, Some(2), Some(4), dec!(18)),
        result(302, BOTTAS, MERCEDES, Some(3), Some(3), dec!(15)),
        result(302, VERSTAPPEN, RED_BULL, None, Some(1), dec!(0)),
    ];

    Tables {
        races,
        drivers,
        constructors,
        circuits,
        results,
    }
}

/// The sample tables joined into a store.
pub fn sample_store() -> DataStore {
    DataStore::from_tables(sample_tables()).expect("sample dataset is consistent")
}

fn circuit(id: CircuitId, name: &str, country: &str) -> Circuit {
    Circuit {
        id,
        name: name.to_string(),
        country: country.to_string(),
        race_count: 0,
    }
}

fn driver(id: DriverId, name: &str, nationality: &str) -> Driver {
    Driver {
        id,
        name: name.to_string(),
        nationality: nationality.to_string(),
    }
}

fn constructor(id: ConstructorId, name: &str, nationality: &str) -> Constructor {
    Constructor {
        id,
        name: name.to_string(),
        nationality: nationality.to_string(),
    }
}

fn race(id: i64, year: i32, circuit_id: CircuitId, name: &str) -> Race {
    Race {
        id: RaceId(id),
        year,
        circuit_id,
        name: name.to_string(),
    }
}

fn result(
    race: i64,
    driver_id: DriverId,
    constructor_id: ConstructorId,
    position: Option<u32>,
    grid: Option<u32>,
    points: Decimal,
) -> RaceResult {
    RaceResult {
        race_id: RaceId(race),
        driver_id,
        constructor_id,
        position,
        grid,
        points,
    }
}
