use crate::math::stats::StatsHelper;
use crate::prelude::{scale_count, Rescale, ZoneId};
use crate::snapshot::zone::ZoneStat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full campus state for one of the 24 simulated hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyStat {
    pub hour: usize,
    pub timestamp: String,
    pub zones: BTreeMap<ZoneId, ZoneStat>,
    pub campus_total: CampusTotal,
}

/// Campus-wide aggregate of the zone rows for one hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusTotal {
    pub active_clients: u64,
    pub total_devices: u64,
    pub avg_zone_load: f64,
    pub max_zone_load: f64,
}

impl CampusTotal {
    /// Sums counts, averages the per-zone average loads and takes the peak
    /// of the per-zone maxima.
    pub fn aggregate<'a, I>(zones: I) -> Self
    where
        I: IntoIterator<Item = &'a ZoneStat>,
    {
        let mut active_clients = 0;
        let mut total_devices = 0;
        let mut avg_loads = Vec::new();
        let mut max_loads = Vec::new();
        for zone in zones {
            active_clients += zone.active_clients;
            total_devices += zone.total_devices;
            avg_loads.push(zone.avg_wap_load);
            max_loads.push(zone.max_wap_load);
        }

        Self {
            active_clients,
            total_devices,
            avg_zone_load: StatsHelper::mean(&avg_loads),
            max_zone_load: StatsHelper::max(&max_loads),
        }
    }
}

impl Rescale for CampusTotal {
    fn rescaled(&self, factor: f64) -> Self {
        Self {
            active_clients: scale_count(self.active_clients, factor),
            total_devices: scale_count(self.total_devices, factor),
            avg_zone_load: self.avg_zone_load * factor,
            max_zone_load: self.max_zone_load * factor,
        }
    }
}

impl Rescale for HourlyStat {
    /// The campus total is scaled from its own precomputed value, never
    /// re-summed from the scaled zones.
    fn rescaled(&self, factor: f64) -> Self {
        Self {
            hour: self.hour,
            timestamp: self.timestamp.clone(),
            zones: self
                .zones
                .iter()
                .map(|(id, stat)| (*id, stat.rescaled(factor)))
                .collect(),
            campus_total: self.campus_total.rescaled(factor),
        }
    }
}
