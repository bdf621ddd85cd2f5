use crate::prelude::ZoneId;
use crate::snapshot::SimulationSnapshot;
use serde::Serialize;

/// Five-step color scale of the activity heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeatLevel {
    Idle,
    Low,
    Moderate,
    Busy,
    Peak,
}

impl HeatLevel {
    pub fn classify(value: u64, max: u64) -> Self {
        let ratio = fill_ratio(value, max);
        if ratio < 0.2 {
            HeatLevel::Idle
        } else if ratio < 0.4 {
            HeatLevel::Low
        } else if ratio < 0.6 {
            HeatLevel::Moderate
        } else if ratio < 0.8 {
            HeatLevel::Busy
        } else {
            HeatLevel::Peak
        }
    }

    /// Cell background as `0xRRGGBB`.
    pub fn rgb(self) -> u32 {
        match self {
            HeatLevel::Idle => 0xFFF3E0,
            HeatLevel::Low => 0xFFE0B2,
            HeatLevel::Moderate => 0xFFBF00,
            HeatLevel::Busy => 0xD4A017,
            HeatLevel::Peak => 0x500000,
        }
    }
}

/// Dark cells need light text from 70% of the maximum upwards.
pub fn uses_light_text(value: u64, max: u64) -> bool {
    fill_ratio(value, max) >= 0.7
}

fn fill_ratio(value: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (value as f64 / max as f64).min(1.0)
}

/// Zone x hour grid of active clients with the global maximum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    pub zones: Vec<ZoneId>,
    pub hour_labels: Vec<String>,
    pub cells: Vec<Vec<u64>>,
    pub max: u64,
}

impl Heatmap {
    pub fn build(snapshot: &SimulationSnapshot) -> Self {
        let zones: Vec<ZoneId> = snapshot.zone_ids().collect();
        let hour_labels = snapshot
            .hourly_stats
            .iter()
            .map(|row| row.timestamp.replace(":00", "h"))
            .collect();
        let cells: Vec<Vec<u64>> = zones
            .iter()
            .map(|zone| {
                snapshot
                    .hourly_stats
                    .iter()
                    .map(|row| {
                        row.zones
                            .get(zone)
                            .map(|stat| stat.active_clients)
                            .unwrap_or(0)
                    })
                    .collect()
            })
            .collect();
        let max = cells.iter().flatten().copied().max().unwrap_or(0);

        Self {
            zones,
            hour_labels,
            cells,
            max,
        }
    }

    pub fn level(&self, zone_index: usize, hour: usize) -> HeatLevel {
        let value = self
            .cells
            .get(zone_index)
            .and_then(|row| row.get(hour))
            .copied()
            .unwrap_or(0);
        HeatLevel::classify(value, self.max)
    }
}
