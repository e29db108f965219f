use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a transparent integer identifier as it appears in the source tables.
macro_rules! table_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

table_id!(
    /// `raceId` in `races.csv`.
    RaceId
);
table_id!(
    /// `driverId` in `drivers.csv`.
    DriverId
);
table_id!(
    /// `constructorId` in `constructors.csv`.
    ConstructorId
);
table_id!(
    /// `circuitId` in `circuits.csv`.
    CircuitId
);
