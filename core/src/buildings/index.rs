use serde::{Deserialize, Serialize};

/// Entry of `buildings_index.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub zone_name: String,
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildingIndex {
    #[serde(default)]
    pub buildings: Vec<BuildingEntry>,
}

impl BuildingIndex {
    pub fn from_json_slice(bytes: &[u8]) -> crate::prelude::SnapshotResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn find(&self, id: &str) -> Option<&BuildingEntry> {
        self.buildings.iter().find(|entry| entry.id == id)
    }
}
