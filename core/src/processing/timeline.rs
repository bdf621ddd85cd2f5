use crate::prelude::{SnapshotError, SnapshotResult, HOURS_PER_DAY};
use crate::snapshot::{HourlyStat, SimulationSnapshot};
use serde::{Deserialize, Serialize};

/// Hour of the simulated day, always within `0..24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HourIndex(usize);

impl HourIndex {
    pub fn new(hour: usize) -> SnapshotResult<Self> {
        if hour < HOURS_PER_DAY {
            Ok(Self(hour))
        } else {
            Err(SnapshotError::HourOutOfRange(hour))
        }
    }

    /// Input-boundary constructor: saturates at the last hour.
    pub fn clamped(hour: usize) -> Self {
        Self(hour.min(HOURS_PER_DAY - 1))
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn advanced(self) -> Self {
        Self(advance_hour(self.0))
    }
}

impl Default for HourIndex {
    fn default() -> Self {
        Self(10)
    }
}

/// Next animation frame; 23 wraps back to 0.
pub fn advance_hour(hour: usize) -> usize {
    (hour + 1) % HOURS_PER_DAY
}

/// Row for the given hour. Out-of-range indices fail instead of clamping.
pub fn select_hour(snapshot: &SimulationSnapshot, hour: usize) -> SnapshotResult<&HourlyStat> {
    snapshot
        .hourly_stats
        .get(hour)
        .filter(|_| hour < HOURS_PER_DAY)
        .ok_or(SnapshotError::HourOutOfRange(hour))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::fixtures::sample_snapshot;

    #[test]
    fn advance_wraps_at_midnight() {
        assert_eq!(advance_hour(23), 0);
        for hour in 0..23 {
            assert_eq!(advance_hour(hour), hour + 1);
        }
    }

    #[test]
    fn select_hour_returns_matching_row() {
        let snapshot = sample_snapshot();
        let row = select_hour(&snapshot, 17).unwrap();
        assert_eq!(row.hour, 17);
        assert_eq!(row.timestamp, "17:00");
    }

    #[test]
    fn select_hour_fails_fast_out_of_range() {
        let snapshot = sample_snapshot();
        assert!(matches!(
            select_hour(&snapshot, 24),
            Err(SnapshotError::HourOutOfRange(24))
        ));
    }

    #[test]
    fn hour_index_validates_and_clamps() {
        assert!(HourIndex::new(24).is_err());
        assert_eq!(HourIndex::new(0).unwrap().get(), 0);
        assert_eq!(HourIndex::clamped(99).get(), 23);
        assert_eq!(HourIndex::clamped(23).advanced().get(), 0);
    }
}
