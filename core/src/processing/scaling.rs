use crate::prelude::{Rescale, SnapshotError, SnapshotResult, DEVICES_PER_CLIENT};
use crate::snapshot::{Metadata, SimulationSnapshot};
use std::borrow::Cow;

/// Ratio between a target population and the baseline population.
pub fn scale_factor(baseline: &Metadata, target_population: u64) -> SnapshotResult<f64> {
    if baseline.total_clients == 0 || target_population == 0 {
        return Err(SnapshotError::ZeroPopulation);
    }
    Ok(target_population as f64 / baseline.total_clients as f64)
}

/// Derives the snapshot for a hypothetical campus population.
///
/// Every zone and every hour is multiplied by the same factor, so the
/// baseline's relative zone distribution is preserved exactly. Callers must
/// always pass the loaded baseline; rescaling a derived snapshot compounds
/// rounding error.
///
/// At the identity point the baseline itself is returned, borrowed.
pub fn scale(
    baseline: &SimulationSnapshot,
    target_population: u64,
) -> SnapshotResult<Cow<'_, SimulationSnapshot>> {
    let factor = scale_factor(&baseline.metadata, target_population)?;
    if target_population == baseline.metadata.total_clients {
        return Ok(Cow::Borrowed(baseline));
    }

    let metadata = Metadata {
        total_clients: target_population,
        total_devices: target_population * DEVICES_PER_CLIENT,
        ..baseline.metadata.clone()
    };
    let hourly_stats = baseline
        .hourly_stats
        .iter()
        .map(|row| row.rescaled(factor))
        .collect();

    Ok(Cow::Owned(SimulationSnapshot {
        metadata,
        zone_info: baseline.zone_info.clone(),
        hourly_stats,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::scale_count;
    use crate::snapshot::fixtures::sample_snapshot;
    use crate::snapshot::ZoneStat;

    #[test]
    fn metadata_tracks_target_population() {
        let baseline = sample_snapshot();
        for target in [90_500, 100_000, 123_000, 140_000] {
            let derived = scale(&baseline, target).unwrap();
            assert_eq!(derived.metadata.total_clients, target);
            assert_eq!(derived.metadata.total_devices, target * 3);
            assert_eq!(derived.metadata.total_aps, baseline.metadata.total_aps);
        }
    }

    #[test]
    fn identity_returns_baseline_without_copying() {
        let baseline = sample_snapshot();
        let derived = scale(&baseline, 90_000).unwrap();
        assert!(matches!(derived, Cow::Borrowed(_)));
        assert_eq!(*derived, baseline);
    }

    #[test]
    fn worked_example_from_ninety_to_one_twenty_thousand() {
        let mut baseline = sample_snapshot();
        *baseline.hourly_stats[9].zones.get_mut(&4).unwrap() = ZoneStat {
            active_clients: 1000,
            total_devices: 3000,
            avg_wap_load: 2.0,
            max_wap_load: 3.0,
            buildings_active: 4,
        };

        let derived = scale(&baseline, 120_000).unwrap();
        let zone = &derived.hourly_stats[9].zones[&4];
        assert_eq!(zone.active_clients, 1333);
        assert_eq!(zone.total_devices, 4000);
        assert!((zone.avg_wap_load - 2.667).abs() < 1e-3);
        assert!((zone.max_wap_load - 4.0).abs() < 1e-9);
        assert_eq!(zone.buildings_active, 4);
    }

    #[test]
    fn counts_are_monotonic_in_population() {
        let baseline = sample_snapshot();
        let populations: Vec<u64> = (90_000..=140_000).step_by(1_000).collect();
        for pair in populations.windows(2) {
            let smaller = scale(&baseline, pair[0]).unwrap();
            let larger = scale(&baseline, pair[1]).unwrap();
            for (low, high) in smaller.hourly_stats.iter().zip(&larger.hourly_stats) {
                assert!(low.campus_total.active_clients <= high.campus_total.active_clients);
                for (zone_id, low_zone) in &low.zones {
                    let high_zone = &high.zones[zone_id];
                    assert!(
                        low_zone.active_clients <= high_zone.active_clients,
                        "zone {} hour {}: {} -> {}",
                        zone_id,
                        low.hour,
                        pair[0],
                        pair[1]
                    );
                    assert!(low_zone.total_devices <= high_zone.total_devices);
                }
            }
        }
    }

    #[test]
    fn repeated_scaling_from_baseline_is_bit_identical() {
        let baseline = sample_snapshot();
        let first = scale(&baseline, 133_000).unwrap().into_owned();
        let second = scale(&baseline, 133_000).unwrap().into_owned();
        assert_eq!(first, second);
        for (a, b) in first.hourly_stats.iter().zip(&second.hourly_stats) {
            assert_eq!(
                a.campus_total.avg_zone_load.to_bits(),
                b.campus_total.avg_zone_load.to_bits()
            );
        }
    }

    #[test]
    fn baseline_is_untouched_by_scaling() {
        let baseline = sample_snapshot();
        let before = baseline.clone();
        let _ = scale(&baseline, 140_000).unwrap();
        assert_eq!(baseline, before);
    }

    #[test]
    fn campus_total_is_scaled_from_the_precomputed_aggregate() {
        let baseline = sample_snapshot();
        let factor = 127_000.0 / 90_000.0;
        let derived = scale(&baseline, 127_000).unwrap();

        for (base_row, row) in baseline.hourly_stats.iter().zip(&derived.hourly_stats) {
            assert_eq!(
                row.campus_total.active_clients,
                scale_count(base_row.campus_total.active_clients, factor)
            );
            assert_eq!(
                row.campus_total.total_devices,
                scale_count(base_row.campus_total.total_devices, factor)
            );

            let resummed: u64 = row.zones.values().map(|z| z.active_clients).sum();
            let drift = resummed.abs_diff(row.campus_total.active_clients);
            assert!(drift <= row.zones.len() as u64);
        }
    }

    #[test]
    fn zero_target_population_is_rejected() {
        let baseline = sample_snapshot();
        assert!(matches!(
            scale(&baseline, 0),
            Err(SnapshotError::ZeroPopulation)
        ));
    }
}
