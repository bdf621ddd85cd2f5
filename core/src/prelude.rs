use std::path::PathBuf;

/// Numeric identifier of a campus zone (1..=12 in the shipped data set).
pub type ZoneId = u32;

/// Number of hourly rows in every snapshot.
pub const HOURS_PER_DAY: usize = 24;

/// Fixed device-per-client ratio of the simulation model.
pub const DEVICES_PER_CLIENT: u64 = 3;

/// Common error type for loading, scaling and querying snapshots.
#[derive(thiserror::Error, Debug)]
pub enum SnapshotError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid snapshot: {0}")]
    Invalid(String),
    #[error("population must be positive")]
    ZeroPopulation,
    #[error("hour index {0} outside 0..24")]
    HourOutOfRange(usize),
    #[error("unknown building: {0}")]
    UnknownBuilding(String),
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Records whose counts and rates grow linearly with campus population.
///
/// Counts are rounded to whole people/devices, rates are kept continuous.
pub trait Rescale {
    fn rescaled(&self, factor: f64) -> Self;
}

/// Scales an integer count and rounds to the nearest whole unit.
pub fn scale_count(count: u64, factor: f64) -> u64 {
    (count as f64 * factor).round() as u64
}
