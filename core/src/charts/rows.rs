use crate::charts::zones::{short_name, zone_name};
use crate::math::stats::StatsHelper;
use crate::prelude::ZoneId;
use crate::snapshot::{HourlyStat, Metadata, SimulationSnapshot, ZoneInfo};
use serde::Serialize;
use std::collections::BTreeMap;

/// One x-axis point of the campus timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineRow {
    pub label: String,
    pub clients_by_zone: Vec<(ZoneId, u64)>,
}

pub fn timeline_rows(snapshot: &SimulationSnapshot) -> Vec<TimelineRow> {
    snapshot
        .hourly_stats
        .iter()
        .map(|row| TimelineRow {
            label: row.timestamp.clone(),
            clients_by_zone: snapshot
                .zone_ids()
                .map(|zone| {
                    let clients = row
                        .zones
                        .get(&zone)
                        .map(|stat| stat.active_clients)
                        .unwrap_or(0);
                    (zone, clients)
                })
                .collect(),
        })
        .collect()
}

/// Bar/radar row for one zone at the selected hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneBar {
    pub zone: ZoneId,
    pub name: String,
    pub short_name: String,
    pub people: u64,
    pub devices: u64,
    pub load: f64,
}

/// Zones ordered by active clients, busiest first.
pub fn zone_breakdown(row: &HourlyStat) -> Vec<ZoneBar> {
    let mut bars: Vec<ZoneBar> = row
        .zones
        .iter()
        .map(|(&zone, stat)| ZoneBar {
            zone,
            name: zone_name(zone),
            short_name: short_name(zone),
            people: stat.active_clients,
            devices: stat.total_devices,
            load: StatsHelper::round_to(stat.avg_wap_load, 1),
        })
        .collect();
    bars.sort_by(|a, b| b.people.cmp(&a.people));
    bars
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneCard {
    pub zone: ZoneId,
    pub name: String,
    pub people: u64,
    pub devices: u64,
    pub aps: u64,
    pub avg_load: f64,
    pub buildings_active: u64,
}

/// Per-zone cards for the zones tab, busiest first.
pub fn zone_cards(row: &HourlyStat, zone_info: &BTreeMap<ZoneId, ZoneInfo>) -> Vec<ZoneCard> {
    let mut cards: Vec<ZoneCard> = row
        .zones
        .iter()
        .map(|(&zone, stat)| ZoneCard {
            zone,
            name: zone_name(zone),
            people: stat.active_clients,
            devices: stat.total_devices,
            aps: zone_info.get(&zone).map(|info| info.aps).unwrap_or(0),
            avg_load: stat.avg_wap_load,
            buildings_active: stat.buildings_active,
        })
        .collect();
    cards.sort_by(|a, b| b.people.cmp(&a.people));
    cards
}

/// Values behind the stat cards row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampusSummary {
    pub timestamp: String,
    pub people: u64,
    pub population: u64,
    pub devices: u64,
    pub total_aps: u64,
    pub ap_model: String,
    pub avg_load: f64,
    pub peak_load: f64,
    pub zones: u32,
    pub buildings: u32,
}

impl CampusSummary {
    pub fn new(row: &HourlyStat, metadata: &Metadata) -> Self {
        Self {
            timestamp: row.timestamp.clone(),
            people: row.campus_total.active_clients,
            population: metadata.total_clients,
            devices: row.campus_total.total_devices,
            total_aps: metadata.total_aps,
            ap_model: metadata.infrastructure.access_points.clone(),
            avg_load: row.campus_total.avg_zone_load,
            peak_load: row.campus_total.max_zone_load,
            zones: metadata.zones,
            buildings: metadata.buildings,
        }
    }
}

/// Busiest hour of the day by campus active clients; earliest wins ties.
pub fn peak_hour(snapshot: &SimulationSnapshot) -> Option<&HourlyStat> {
    snapshot
        .hourly_stats
        .iter()
        .rev()
        .max_by_key(|row| row.campus_total.active_clients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::fixtures::sample_snapshot;

    #[test]
    fn timeline_has_a_row_per_hour_and_a_column_per_zone() {
        let snapshot = sample_snapshot();
        let rows = timeline_rows(&snapshot);
        assert_eq!(rows.len(), 24);
        assert_eq!(rows[3].label, "03:00");
        assert_eq!(rows[3].clients_by_zone.len(), 12);
        assert_eq!(rows[3].clients_by_zone[0], (1, 200 + 37 * 3 + 11));
    }

    #[test]
    fn breakdown_is_sorted_busiest_first() {
        let snapshot = sample_snapshot();
        let bars = zone_breakdown(&snapshot.hourly_stats[0]);
        assert_eq!(bars.len(), 12);
        assert_eq!(bars[0].zone, 12);
        assert_eq!(bars[0].short_name, "South College Station");
        assert!(bars.windows(2).all(|pair| pair[0].people >= pair[1].people));
    }

    #[test]
    fn breakdown_load_is_rounded_to_one_decimal() {
        let snapshot = sample_snapshot();
        let bars = zone_breakdown(&snapshot.hourly_stats[1]);
        for bar in bars {
            assert_eq!(bar.load, (bar.load * 10.0).round() / 10.0);
        }
    }

    #[test]
    fn cards_pick_up_access_point_counts() {
        let snapshot = sample_snapshot();
        let cards = zone_cards(&snapshot.hourly_stats[5], &snapshot.zone_info);
        let west = cards.iter().find(|card| card.zone == 1).unwrap();
        assert_eq!(west.aps, 100);
        assert_eq!(west.name, "West Campus");
    }

    #[test]
    fn summary_reads_campus_total_and_metadata() {
        let snapshot = sample_snapshot();
        let row = &snapshot.hourly_stats[8];
        let summary = CampusSummary::new(row, &snapshot.metadata);
        assert_eq!(summary.people, row.campus_total.active_clients);
        assert_eq!(summary.population, 90_000);
        assert_eq!(summary.ap_model, "Juniper AP47");
    }

    #[test]
    fn peak_hour_prefers_earliest_maximum() {
        let mut snapshot = sample_snapshot();
        assert_eq!(peak_hour(&snapshot).unwrap().hour, 23);

        snapshot.hourly_stats[4].campus_total.active_clients = 1_000_000;
        snapshot.hourly_stats[6].campus_total.active_clients = 1_000_000;
        assert_eq!(peak_hour(&snapshot).unwrap().hour, 4);
    }
}
