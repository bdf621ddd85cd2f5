use serde::{Deserialize, Serialize};

/// Campus-wide constants written by the external simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub campus: String,
    #[serde(default)]
    pub simulation_date: String,
    pub total_clients: u64,
    pub total_devices: u64,
    pub total_aps: u64,
    pub zones: u32,
    pub buildings: u32,
    #[serde(default)]
    pub full_load: bool,
    #[serde(default)]
    pub infrastructure: Infrastructure,
}

/// Hardware descriptors shown in the header and footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Infrastructure {
    pub access_points: String,
    pub edge_appliance: String,
    pub switches: String,
    pub data_centers: u32,
}
