//! # Paddock Data Store
//!
//! This crate owns the race dataset. It reads the source CSV tables once at
//! startup, joins results to their races, validates every reference, and then
//! serves read-only views for the rest of the application.
//!
//! ## Public API
//!
//! - `load_from_dir`: reads `races.csv`, `results.csv`, `drivers.csv`,
//!   `constructors.csv` and `circuits.csv` from a directory.
//! - `DataStore`: the immutable, joined dataset with year-range scans and name lookups.
//! - `Tables`: the raw tables, for building a store from memory.
//! - `DataStoreError`: everything that can go wrong while loading. All of it is fatal.

// Declare the modules that constitute this crate.
pub mod error;
pub mod loader;
#[cfg(any(test, feature = "sample"))]
pub mod sample;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use error::DataStoreError;
pub use loader::{load_from_dir, load_tables};
pub use store::{DataStore, Tables};
