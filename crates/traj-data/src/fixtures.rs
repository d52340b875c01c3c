//! Sample data fixtures for testing.
//!
//! This module provides ready-made tables for other crates to use.
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // traj-data = { path = "../traj-data", features = ["test-fixtures"] }
//!
//! use traj_data::fixtures;
//!
//! let table = fixtures::sample_table();
//! ```

use crate::TrajectoryTable;

/// CSV with already-mangled headers.
///
/// Contains 5 rows and 2 entities:
/// - Entity0 moving from (0, 0, 0) to (4, 2, 1)
/// - Entity1 moving from (10, -5, 2) to (6, -1, 2) at constant height
pub const SAMPLE_RESULTS_CSV: &str = include_str!("../tests/fixtures/sample_results.csv");

/// CSV as written by the simulator: names repeated per state component.
///
/// Contains 3 rows and 2 entities with 6 state components each:
/// - Entity0 drifting from (1, 2, 3) to (1.1, 2.2, 3.3)
/// - Entity1 parked at (-1, -2, -3)
pub const SIMULATOR_OUTPUT_CSV: &str = include_str!("../tests/fixtures/simulator_output.csv");

/// Returns the parsed [`SAMPLE_RESULTS_CSV`] table.
pub fn sample_table() -> TrajectoryTable {
    TrajectoryTable::from_reader(SAMPLE_RESULTS_CSV.as_bytes())
        .expect("Failed to parse sample_results.csv")
}

/// Returns the parsed [`SIMULATOR_OUTPUT_CSV`] table.
pub fn simulator_table() -> TrajectoryTable {
    TrajectoryTable::from_reader(SIMULATOR_OUTPUT_CSV.as_bytes())
        .expect("Failed to parse simulator_output.csv")
}
