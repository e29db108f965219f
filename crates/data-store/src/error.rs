use core_types::{CircuitId, ConstructorId, DriverId, RaceId};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataStoreError {
    #[error("Data file not found: {0}")]
    MissingFile(PathBuf),

    #[error("Failed to parse a source table: {0}")]
    Parse(#[from] polars::prelude::PolarsError),

    #[error("Table '{table}' has no column '{column}'")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error("Table '{table}' row {row}: column '{column}' is empty or malformed")]
    MissingValue {
        table: &'static str,
        column: &'static str,
        row: usize,
    },

    #[error("Race {race} references unknown circuit {circuit}")]
    UnknownCircuit { race: RaceId, circuit: CircuitId },

    #[error("A result references unknown race {0}")]
    UnknownRace(RaceId),

    #[error("A result in race {race} references unknown driver {driver}")]
    UnknownDriver { race: RaceId, driver: DriverId },

    #[error("A result in race {race} references unknown constructor {constructor}")]
    UnknownConstructor {
        race: RaceId,
        constructor: ConstructorId,
    },

    #[error("Duplicate {table} id {id}")]
    DuplicateId { table: &'static str, id: String },
}
