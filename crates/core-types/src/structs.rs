use crate::ids::{CircuitId, ConstructorId, DriverId, RaceId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A Grand Prix, one row of `races.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub id: RaceId,
    pub year: i32,
    pub circuit_id: CircuitId,
    pub name: String,
}

/// A driver, one row of `drivers.csv`. `name` is `forename surname`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub nationality: String,
}

/// A team entrant, one row of `constructors.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constructor {
    pub id: ConstructorId,
    pub name: String,
    pub nationality: String,
}

/// A venue, one row of `circuits.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    pub id: CircuitId,
    pub name: String,
    pub country: String,
    /// Number of races held here. Derived when the data store is built.
    #[serde(default)]
    pub race_count: usize,
}

/// One classified (or not) finisher, one row of `results.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    pub race_id: RaceId,
    pub driver_id: DriverId,
    pub constructor_id: ConstructorId,
    /// Finishing position; `None` for retirements and disqualifications.
    pub position: Option<u32>,
    /// Starting grid slot; `None` or `0` for pit-lane starts.
    pub grid: Option<u32>,
    pub points: Decimal,
}

/// A result joined with the race it belongs to.
///
/// This is the row type every aggregation scans. Entity names are resolved
/// through the data store only when a label is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub race_id: RaceId,
    pub year: i32,
    pub circuit_id: CircuitId,
    pub driver_id: DriverId,
    pub constructor_id: ConstructorId,
    pub position: Option<u32>,
    pub grid: Option<u32>,
    pub points: Decimal,
}

impl ResultRow {
    pub fn join(result: &RaceResult, race: &Race) -> Self {
        Self {
            race_id: result.race_id,
            year: race.year,
            circuit_id: race.circuit_id,
            driver_id: result.driver_id,
            constructor_id: result.constructor_id,
            position: result.position,
            grid: result.grid,
            points: result.points,
        }
    }

    pub fn is_win(&self) -> bool {
        self.position == Some(1)
    }

    pub fn is_podium(&self) -> bool {
        matches!(self.position, Some(1..=3))
    }

    pub fn is_pole(&self) -> bool {
        self.grid == Some(1)
    }
}
