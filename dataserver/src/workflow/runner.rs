use crate::workflow::config::DashboardConfig;
use anyhow::Context;
use log::warn;
use std::fmt::Write as _;
use std::sync::Arc;
use wificore::charts::{grouped, peak_hour, zone_breakdown, CampusSummary, ZoneBar};
use wificore::processing::{growth_percent, scale, select_hour};
use wificore::snapshot::validate;
use wificore::SimulationSnapshot;

pub struct HourReport {
    pub population: u64,
    pub growth_percent: i64,
    pub summary: CampusSummary,
    pub zones: Vec<ZoneBar>,
    pub peak_timestamp: String,
    pub peak_clients: u64,
}

impl HourReport {
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} people ({:+}%) at {}: {} on WiFi, {} devices, {:.1} avg / {:.1} peak devices per AP",
            grouped(self.population),
            self.growth_percent,
            self.summary.timestamp,
            grouped(self.summary.people),
            grouped(self.summary.devices),
            self.summary.avg_load,
            self.summary.peak_load
        );
        for bar in &self.zones {
            let _ = writeln!(
                out,
                "  {:<24} {:>8} people {:>9} devices {:>6.1} /AP",
                bar.name,
                grouped(bar.people),
                grouped(bar.devices),
                bar.load
            );
        }
        let _ = writeln!(
            out,
            "peak hour {} with {} people",
            self.peak_timestamp,
            grouped(self.peak_clients)
        );
        out
    }
}

/// Owns the immutable baseline and answers population/hour queries on it.
#[derive(Clone)]
pub struct Runner {
    baseline: Arc<SimulationSnapshot>,
}

impl Runner {
    pub fn load(config: &DashboardConfig) -> anyhow::Result<Self> {
        let snapshot = SimulationSnapshot::load(&config.data_file)
            .with_context(|| format!("loading snapshot {}", config.data_file.display()))?;
        Ok(Self {
            baseline: Arc::new(snapshot),
        })
    }

    /// Snapshots built in memory go through the same validation as loaded ones.
    pub fn new(snapshot: SimulationSnapshot) -> anyhow::Result<Self> {
        for warning in validate(&snapshot).context("validating snapshot")? {
            warn!("{}", warning);
        }
        Ok(Self {
            baseline: Arc::new(snapshot),
        })
    }

    pub fn baseline(&self) -> &Arc<SimulationSnapshot> {
        &self.baseline
    }

    pub fn execute(&self, population: Option<u64>, hour: usize) -> anyhow::Result<HourReport> {
        let base_population = self.baseline.metadata.total_clients;
        let population = population.unwrap_or(base_population);
        let derived = scale(&self.baseline, population)
            .with_context(|| format!("scaling to population {}", population))?;
        let row = select_hour(&derived, hour).context("selecting report hour")?;
        let peak = peak_hour(&derived).context("snapshot has no hourly rows")?;

        Ok(HourReport {
            population,
            growth_percent: growth_percent(population, base_population),
            summary: CampusSummary::new(row, &derived.metadata),
            zones: zone_breakdown(row),
            peak_timestamp: peak.timestamp.clone(),
            peak_clients: peak.campus_total.active_clients,
        })
    }
}
