use serde::{Deserialize, Serialize};
use wificore::SimulationSnapshot;

/// Body of `GET /status`, letting the dashboard check what is being hosted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetStatus {
    pub campus: String,
    pub simulation_date: String,
    pub total_clients: u64,
    pub zones: usize,
    pub hours: usize,
    pub drill_down_available: bool,
}

impl DatasetStatus {
    pub fn describe(snapshot: &SimulationSnapshot, drill_down_available: bool) -> Self {
        Self {
            campus: snapshot.metadata.campus.clone(),
            simulation_date: snapshot.metadata.simulation_date.clone(),
            total_clients: snapshot.metadata.total_clients,
            zones: snapshot.zone_info.len(),
            hours: snapshot.hourly_stats.len(),
            drill_down_available,
        }
    }
}
