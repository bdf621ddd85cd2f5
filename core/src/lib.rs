//! Data model and view state for the campus WiFi usage dashboard.
//!
//! The baseline simulation snapshot is loaded once and never mutated; every
//! population change derives a fresh scaled snapshot from it, and the views
//! read hourly rows and chart rows out of that derived copy.

pub mod buildings;
pub mod charts;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod snapshot;
pub mod telemetry;
pub mod view;

pub use prelude::{Rescale, SnapshotError, SnapshotResult, ZoneId};
pub use snapshot::SimulationSnapshot;
