use crate::prelude::HOURS_PER_DAY;
use crate::snapshot::{
    CampusTotal, HourlyStat, Infrastructure, Metadata, SimulationSnapshot, ZoneInfo, ZoneStat,
};
use std::collections::BTreeMap;

/// Twelve-zone, 90k-client day that satisfies every load-time convention.
pub(crate) fn sample_snapshot() -> SimulationSnapshot {
    let zone_info: BTreeMap<_, _> = (1..=12u32)
        .map(|zone| {
            (
                zone,
                ZoneInfo {
                    buildings: 10 + zone as u64,
                    aps: 100 * zone as u64,
                    allocated_clients: 7_500,
                },
            )
        })
        .collect();

    let hourly_stats = (0..HOURS_PER_DAY)
        .map(|hour| {
            let zones: BTreeMap<_, _> = zone_info
                .iter()
                .map(|(&zone, info)| {
                    let active = 200 * zone as u64 + 37 * hour as u64 + 11;
                    let devices = active * 3;
                    let avg = devices as f64 / info.aps as f64;
                    (
                        zone,
                        ZoneStat {
                            active_clients: active,
                            total_devices: devices,
                            avg_wap_load: avg,
                            max_wap_load: avg * 1.5,
                            buildings_active: (hour as u64 % 5) + 1,
                        },
                    )
                })
                .collect();
            let campus_total = CampusTotal::aggregate(zones.values());
            HourlyStat {
                hour,
                timestamp: format!("{:02}:00", hour),
                zones,
                campus_total,
            }
        })
        .collect();

    SimulationSnapshot {
        metadata: Metadata {
            campus: "Texas A&M University".into(),
            simulation_date: "2026-02-03T00:00:00".into(),
            total_clients: 90_000,
            total_devices: 270_000,
            total_aps: 7_800,
            zones: 12,
            buildings: 198,
            full_load: true,
            infrastructure: Infrastructure {
                access_points: "Juniper AP47".into(),
                edge_appliance: "Mist Edge X6".into(),
                switches: "Juniper EX-4400-48MP".into(),
                data_centers: 2,
            },
        },
        zone_info,
        hourly_stats,
    }
}
