//! Simulation snapshot documents and their load-time validation.

pub mod hourly;
pub mod metadata;
pub mod zone;

#[cfg(test)]
pub(crate) mod fixtures;

pub use hourly::{CampusTotal, HourlyStat};
pub use metadata::{Infrastructure, Metadata};
pub use zone::{ZoneInfo, ZoneStat};

use crate::prelude::{SnapshotError, SnapshotResult, ZoneId, DEVICES_PER_CLIENT, HOURS_PER_DAY};
use crate::telemetry::log::LogManager;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Metadata, zone capacities and the 24 hourly rows of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub metadata: Metadata,
    pub zone_info: BTreeMap<ZoneId, ZoneInfo>,
    pub hourly_stats: Vec<HourlyStat>,
}

impl SimulationSnapshot {
    pub fn from_json_slice(bytes: &[u8]) -> SnapshotResult<Self> {
        let snapshot: SimulationSnapshot = serde_json::from_slice(bytes)?;
        snapshot.checked()
    }

    pub fn from_json_str(text: &str) -> SnapshotResult<Self> {
        Self::from_json_slice(text.as_bytes())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> SnapshotResult<Self> {
        let path_ref = path.as_ref();
        let bytes = fs::read(path_ref).map_err(|source| SnapshotError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_json_slice(&bytes)?;
        LogManager::new("snapshot").record(&format!(
            "loaded {} ({} zones, {} hours)",
            path_ref.display(),
            snapshot.zone_info.len(),
            snapshot.hourly_stats.len()
        ));
        Ok(snapshot)
    }

    pub fn zone_ids(&self) -> impl Iterator<Item = ZoneId> + '_ {
        self.zone_info.keys().copied()
    }

    fn checked(self) -> SnapshotResult<Self> {
        let logger = LogManager::new("snapshot");
        for warning in validate(&self)? {
            logger.caution(&warning);
        }
        Ok(self)
    }
}

/// Rejects documents the views cannot render and returns soft warnings for
/// conventions the simulation is expected, but not required, to follow.
pub fn validate(snapshot: &SimulationSnapshot) -> SnapshotResult<Vec<String>> {
    let metadata = &snapshot.metadata;
    if metadata.total_clients == 0 {
        return Err(SnapshotError::ZeroPopulation);
    }
    if snapshot.hourly_stats.len() != HOURS_PER_DAY {
        return Err(SnapshotError::Invalid(format!(
            "expected {} hourly rows, found {}",
            HOURS_PER_DAY,
            snapshot.hourly_stats.len()
        )));
    }

    let mut warnings = Vec::new();
    if metadata.total_devices != metadata.total_clients * DEVICES_PER_CLIENT {
        warnings.push(format!(
            "total_devices {} is not {}x total_clients {}",
            metadata.total_devices, DEVICES_PER_CLIENT, metadata.total_clients
        ));
    }

    let allocated: u64 = snapshot
        .zone_info
        .values()
        .map(|info| info.allocated_clients)
        .sum();
    if allocated != metadata.total_clients {
        warnings.push(format!(
            "zone allocations sum to {} but total_clients is {}",
            allocated, metadata.total_clients
        ));
    }

    for (index, row) in snapshot.hourly_stats.iter().enumerate() {
        if row.hour != index {
            return Err(SnapshotError::Invalid(format!(
                "hourly row {} is labelled hour {}",
                index, row.hour
            )));
        }
        for (zone_id, stat) in &row.zones {
            let info = snapshot.zone_info.get(zone_id).ok_or_else(|| {
                SnapshotError::Invalid(format!(
                    "hour {} references zone {} missing from zone_info",
                    index, zone_id
                ))
            })?;
            if stat.buildings_active > info.buildings {
                warnings.push(format!(
                    "hour {} zone {}: {} active buildings exceeds {}",
                    index, zone_id, stat.buildings_active, info.buildings
                ));
            }
            if stat.max_wap_load < stat.avg_wap_load {
                warnings.push(format!(
                    "hour {} zone {}: max load {:.2} below average {:.2}",
                    index, zone_id, stat.max_wap_load, stat.avg_wap_load
                ));
            }
        }
    }

    Ok(warnings)
}
