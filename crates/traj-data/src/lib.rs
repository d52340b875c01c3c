//! Trajectory table types and CSV loading.
//!
//! This crate contains pure data structures with no plotting logic. It reads
//! the results CSV written by a simulation run and exposes per-entity
//! position tracks and per-step frames.
//!
//! # Column layout
//!
//! ```text
//! Time, Entity0, Entity0.1, Entity0.2, Entity1, Entity1.1, Entity1.2, ...
//! ```
//!
//! Files written directly by the simulator repeat the entity name for every
//! state component; those headers are mangled into the layout above on load.

pub mod echo;
pub mod headers;
pub mod point;
pub mod table;
pub mod tracks;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

pub use echo::echo_rows;
pub use headers::{
    component_column, is_entity_base, mangle_headers, DEFAULT_ENTITY_PATTERN, DEFAULT_TIME_COLUMN,
    POSITION_COMPONENTS,
};
pub use point::{Bounds3, Point3};
pub use table::{TableError, TrajectoryTable};
pub use tracks::{EntityTrack, Frame, Trajectories};
