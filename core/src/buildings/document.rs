use crate::prelude::SnapshotResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Survey variants in order of preference when a floor appears more than once.
const VARIANT_PRIORITY: [&str; 4] = [" (Post)", " (Existing)", " (Predictive)", " (old-Post)"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingInfo {
    pub name: String,
    #[serde(default)]
    pub zone_id: Option<u32>,
    #[serde(default)]
    pub zone_name: String,
    #[serde(default)]
    pub building_type: String,
    #[serde(default)]
    pub floors: u32,
    #[serde(default)]
    pub square_feet: Option<u64>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width_ft: f64,
    pub height_ft: f64,
}

impl Dimensions {
    pub fn area(&self) -> f64 {
        self.width_ft * self.height_ft
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorInfo {
    pub floor_number: i32,
    pub floor_label: String,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default)]
    pub ap_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkInfo {
    #[serde(default)]
    pub total_aps: u32,
}

/// Per-building document served from `buildings/<id>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingDocument {
    pub building_info: BuildingInfo,
    #[serde(default)]
    pub floor_info: Vec<FloorInfo>,
    #[serde(default)]
    pub network_info: Option<NetworkInfo>,
}

impl BuildingDocument {
    pub fn from_json_slice(bytes: &[u8]) -> SnapshotResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn floor(&self, floor_number: i32) -> Option<&FloorInfo> {
        self.floor_info
            .iter()
            .find(|floor| floor.floor_number == floor_number)
    }

    /// Floor selected when the building view opens.
    pub fn default_floor(&self) -> Option<i32> {
        self.floor_info.first().map(|floor| floor.floor_number)
    }

    /// Keeps one survey variant per floor number and recomputes the
    /// building totals from the surviving floors.
    pub fn deduplicate_floors(&mut self) {
        let mut by_number: BTreeMap<i32, Vec<FloorInfo>> = BTreeMap::new();
        for floor in self.floor_info.drain(..) {
            by_number.entry(floor.floor_number).or_default().push(floor);
        }

        let floors: Vec<FloorInfo> = by_number
            .into_values()
            .filter_map(preferred_variant)
            .collect();

        self.building_info.floors = floors.len() as u32;
        let areas: Vec<f64> = floors
            .iter()
            .filter_map(|floor| floor.dimensions.map(|dims| dims.area()))
            .collect();
        // without any floor dimensions the document's own area stands
        if !areas.is_empty() {
            self.building_info.square_feet = Some(areas.iter().sum::<f64>() as u64);
        }
        let total_aps = floors.iter().map(|floor| floor.ap_count).sum();
        self.network_info = Some(NetworkInfo { total_aps });
        self.floor_info = floors;
    }
}

fn preferred_variant(variants: Vec<FloorInfo>) -> Option<FloorInfo> {
    let position = VARIANT_PRIORITY
        .iter()
        .find_map(|tag| {
            variants
                .iter()
                .position(|variant| variant.floor_label.contains(tag))
        })
        .unwrap_or(0);
    variants.into_iter().nth(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor(number: i32, label: &str, aps: u32) -> FloorInfo {
        FloorInfo {
            floor_number: number,
            floor_label: label.into(),
            dimensions: Some(Dimensions {
                width_ft: 100.0,
                height_ft: 50.0,
            }),
            ap_count: aps,
        }
    }

    fn document(floors: Vec<FloorInfo>) -> BuildingDocument {
        BuildingDocument {
            building_info: BuildingInfo {
                name: "Evans Library".into(),
                zone_id: Some(2),
                zone_name: "Central Campus".into(),
                building_type: "library".into(),
                floors: floors.len() as u32,
                square_feet: Some(13_255_833),
                coordinates: None,
            },
            floor_info: floors,
            network_info: None,
        }
    }

    #[test]
    fn dedup_prefers_post_survey() {
        let mut doc = document(vec![
            floor(1, "Level 1 (Existing)", 4),
            floor(1, "Level 1 (Post)", 6),
            floor(1, "Level 1 (old-Post)", 9),
        ]);
        doc.deduplicate_floors();
        assert_eq!(doc.floor_info.len(), 1);
        assert_eq!(doc.floor_info[0].floor_label, "Level 1 (Post)");
        assert_eq!(doc.network_info.as_ref().unwrap().total_aps, 6);
    }

    #[test]
    fn dedup_falls_back_to_first_variant_and_recomputes_totals() {
        let mut doc = document(vec![
            floor(2, "Level 2 draft", 3),
            floor(1, "Level 1 (Predictive)", 5),
            floor(2, "Level 2 copy", 8),
            floor(1, "Level 1 (old-Post)", 1),
        ]);
        doc.deduplicate_floors();
        let labels: Vec<_> = doc.floor_info.iter().map(|f| f.floor_label.as_str()).collect();
        assert_eq!(labels, ["Level 1 (Predictive)", "Level 2 draft"]);
        assert_eq!(doc.building_info.floors, 2);
        assert_eq!(doc.building_info.square_feet, Some(10_000));
        assert_eq!(doc.network_info.unwrap().total_aps, 8);
    }

    #[test]
    fn dedup_keeps_document_area_when_floors_lack_dimensions() {
        let mut doc = BuildingDocument::from_json_slice(
            br#"{"building_info": {"name": "Zachry", "square_feet": 250000},
                 "floor_info": [{"floor_number": 1, "floor_label": "Level 1", "ap_count": 12}]}"#,
        )
        .unwrap();
        doc.deduplicate_floors();
        assert_eq!(doc.building_info.square_feet, Some(250_000));
        assert_eq!(doc.network_info.unwrap().total_aps, 12);
    }

    #[test]
    fn document_parses_minimal_json() {
        let doc = BuildingDocument::from_json_slice(
            br#"{"building_info": {"name": "Zachry"},
                 "floor_info": [{"floor_number": 0, "floor_label": "Ground"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.default_floor(), Some(0));
        assert!(doc.floor(0).unwrap().dimensions.is_none());
        assert!(doc.floor(3).is_none());
    }
}
