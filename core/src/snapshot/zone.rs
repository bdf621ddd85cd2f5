use crate::prelude::{scale_count, Rescale};
use serde::{Deserialize, Serialize};

/// Static capacity descriptors of one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneInfo {
    pub buildings: u64,
    pub aps: u64,
    pub allocated_clients: u64,
}

/// Activity of one zone during one simulated hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneStat {
    pub active_clients: u64,
    pub total_devices: u64,
    pub avg_wap_load: f64,
    pub max_wap_load: f64,
    pub buildings_active: u64,
}

impl Rescale for ZoneStat {
    /// Building activity is not population-sensitive and passes through.
    fn rescaled(&self, factor: f64) -> Self {
        Self {
            active_clients: scale_count(self.active_clients, factor),
            total_devices: scale_count(self.total_devices, factor),
            avg_wap_load: self.avg_wap_load * factor,
            max_wap_load: self.max_wap_load * factor,
            buildings_active: self.buildings_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_stat_rescale_rounds_counts_only() {
        let stat = ZoneStat {
            active_clients: 1000,
            total_devices: 3000,
            avg_wap_load: 2.0,
            max_wap_load: 3.0,
            buildings_active: 7,
        };
        let scaled = stat.rescaled(120_000.0 / 90_000.0);
        assert_eq!(scaled.active_clients, 1333);
        assert_eq!(scaled.total_devices, 4000);
        assert!((scaled.avg_wap_load - 2.6667).abs() < 1e-3);
        assert!((scaled.max_wap_load - 4.0).abs() < 1e-9);
        assert_eq!(scaled.buildings_active, 7);
    }
}
