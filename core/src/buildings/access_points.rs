use crate::prelude::{SnapshotError, SnapshotResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApLocation {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub height_ft: f64,
    #[serde(default)]
    pub room: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Radio {
    pub enabled: bool,
    pub channel: u32,
    pub power_dbm: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadioConfig {
    #[serde(rename = "2.4GHz", default)]
    pub band_2_4ghz: Option<Radio>,
    #[serde(rename = "5GHz", default)]
    pub band_5ghz: Option<Radio>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    TwoFourGhz,
    FiveGhz,
}

impl RadioConfig {
    /// Radio for the band, only when it is switched on.
    pub fn enabled(&self, band: Band) -> Option<&Radio> {
        let radio = match band {
            Band::TwoFourGhz => self.band_2_4ghz.as_ref(),
            Band::FiveGhz => self.band_5ghz.as_ref(),
        };
        radio.filter(|radio| radio.enabled)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessPoint {
    pub ap_id: String,
    #[serde(default)]
    pub name: String,
    pub floor: i32,
    pub location: ApLocation,
    #[serde(default)]
    pub radio_config: RadioConfig,
}

/// Which radios an access point has enabled; drives its floor-plan marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandCoverage {
    DualBand,
    FiveGhzOnly,
    TwoFourGhzOnly,
    Off,
}

impl BandCoverage {
    pub fn of(ap: &AccessPoint) -> Self {
        let low = ap.radio_config.enabled(Band::TwoFourGhz).is_some();
        let high = ap.radio_config.enabled(Band::FiveGhz).is_some();
        match (low, high) {
            (true, true) => BandCoverage::DualBand,
            (false, true) => BandCoverage::FiveGhzOnly,
            (true, false) => BandCoverage::TwoFourGhzOnly,
            (false, false) => BandCoverage::Off,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildingAccessPoints {
    #[serde(default)]
    pub access_points: Vec<AccessPoint>,
}

/// `ap_locations.json`, keyed by building id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApLocations(pub HashMap<String, BuildingAccessPoints>);

impl ApLocations {
    pub fn from_json_slice(bytes: &[u8]) -> SnapshotResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn for_building(&self, building_id: &str) -> SnapshotResult<&BuildingAccessPoints> {
        self.0
            .get(building_id)
            .ok_or_else(|| SnapshotError::UnknownBuilding(building_id.to_string()))
    }
}

pub fn access_points_on_floor(aps: &[AccessPoint], floor: i32) -> Vec<&AccessPoint> {
    aps.iter().filter(|ap| ap.floor == floor).collect()
}

/// Number of enabled radios per channel on one band, ordered by channel.
pub fn channel_distribution(aps: &[AccessPoint], band: Band) -> BTreeMap<u32, usize> {
    let mut distribution = BTreeMap::new();
    for radio in aps.iter().filter_map(|ap| ap.radio_config.enabled(band)) {
        *distribution.entry(radio.channel).or_insert(0) += 1;
    }
    distribution
}

#[cfg(test)]
mod tests {
    use super::*;

    const AP_JSON: &str = r#"{
        "0468": {"access_points": [
            {"ap_id": "AP-1", "name": "EVANS-101", "floor": 1,
             "location": {"x": 10.0, "y": 20.0, "height_ft": 9.5, "room": "101"},
             "radio_config": {"2.4GHz": {"enabled": true, "channel": 1, "power_dbm": 12},
                              "5GHz": {"enabled": true, "channel": 36, "power_dbm": 17}}},
            {"ap_id": "AP-2", "name": "EVANS-201", "floor": 2,
             "location": {"x": 40.0, "y": 5.0, "height_ft": 9.5},
             "radio_config": {"2.4GHz": {"enabled": false, "channel": 6, "power_dbm": 12},
                              "5GHz": {"enabled": true, "channel": 36, "power_dbm": 17}}},
            {"ap_id": "AP-3", "name": "EVANS-202", "floor": 2,
             "location": {"x": 80.0, "y": 15.0, "height_ft": 10.0},
             "radio_config": {"2.4GHz": {"enabled": true, "channel": 11, "power_dbm": 10}}}
        ]}
    }"#;

    fn evans() -> Vec<AccessPoint> {
        let locations = ApLocations::from_json_slice(AP_JSON.as_bytes()).unwrap();
        locations.for_building("0468").unwrap().access_points.clone()
    }

    #[test]
    fn unknown_building_is_an_error() {
        let locations = ApLocations::from_json_slice(AP_JSON.as_bytes()).unwrap();
        assert!(matches!(
            locations.for_building("0001"),
            Err(SnapshotError::UnknownBuilding(_))
        ));
    }

    #[test]
    fn floor_filter_keeps_matching_access_points() {
        let aps = evans();
        let second = access_points_on_floor(&aps, 2);
        assert_eq!(second.len(), 2);
        assert!(access_points_on_floor(&aps, 5).is_empty());
    }

    #[test]
    fn channel_distribution_counts_enabled_radios_only() {
        let aps = evans();
        let low = channel_distribution(&aps, Band::TwoFourGhz);
        assert_eq!(low.into_iter().collect::<Vec<_>>(), vec![(1, 1), (11, 1)]);
        let high = channel_distribution(&aps, Band::FiveGhz);
        assert_eq!(high.get(&36), Some(&2));
    }

    #[test]
    fn band_coverage_classification() {
        let aps = evans();
        assert_eq!(BandCoverage::of(&aps[0]), BandCoverage::DualBand);
        assert_eq!(BandCoverage::of(&aps[1]), BandCoverage::FiveGhzOnly);
        assert_eq!(BandCoverage::of(&aps[2]), BandCoverage::TwoFourGhzOnly);
    }
}
