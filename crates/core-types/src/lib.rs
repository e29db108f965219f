pub mod error;
pub mod ids;
pub mod structs;
pub mod years;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use ids::{CircuitId, ConstructorId, DriverId, RaceId};
pub use structs::{Circuit, Constructor, Driver, Race, RaceResult, ResultRow};
pub use years::YearRange;
