use crate::prelude::SnapshotResult;
use crate::processing::{scale, select_hour, HourIndex, PopulationRange};
use crate::snapshot::{validate, HourlyStat, SimulationSnapshot};
use crate::telemetry::log::LogManager;
use std::borrow::Cow;
use std::sync::Arc;

/// Tabs of the dashboard body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Zones,
    Heatmap,
    Buildings,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Zones, Tab::Heatmap, Tab::Buildings];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Zones => "Campus Zones",
            Tab::Heatmap => "Activity Heatmap",
            Tab::Buildings => "Buildings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    Playing,
    #[default]
    Paused,
}

/// Discrete inputs accepted by [`SimulationView::update`].
#[derive(Debug, Clone)]
pub enum ViewEvent {
    Loaded(Result<Arc<SimulationSnapshot>, String>),
    PopulationChanged(u64),
    HourSelected(usize),
    Tick,
    TogglePlayback,
    TabSelected(Tab),
}

/// Selection state over a loaded baseline.
#[derive(Debug, Clone)]
pub struct Dashboard {
    baseline: Arc<SimulationSnapshot>,
    derived: Arc<SimulationSnapshot>,
    population: u64,
    range: PopulationRange,
    hour: HourIndex,
    playback: Playback,
    tab: Tab,
}

impl Dashboard {
    /// Rejects baselines that fail load validation, so every `Dashboard`
    /// holds a full day with a positive population.
    pub fn new(baseline: Arc<SimulationSnapshot>) -> SnapshotResult<Self> {
        for warning in validate(&baseline)? {
            LogManager::new("view").caution(&warning);
        }
        let population = baseline.metadata.total_clients;
        Ok(Self {
            derived: Arc::clone(&baseline),
            baseline,
            population,
            range: PopulationRange::default(),
            hour: HourIndex::default(),
            playback: Playback::Paused,
            tab: Tab::Overview,
        })
    }

    pub fn baseline(&self) -> &SimulationSnapshot {
        &self.baseline
    }

    /// Snapshot scaled to the selected population.
    pub fn snapshot(&self) -> &SimulationSnapshot {
        &self.derived
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn population_range(&self) -> PopulationRange {
        self.range
    }

    pub fn hour(&self) -> HourIndex {
        self.hour
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Row of the derived snapshot for the selected hour.
    pub fn current_row(&self) -> Option<&HourlyStat> {
        select_hour(&self.derived, self.hour.get()).ok()
    }

    fn with_population(mut self, requested: u64) -> Self {
        let population = self.range.clamp(requested);
        if population == self.population {
            return self;
        }
        match scale(&self.baseline, population) {
            Ok(Cow::Borrowed(_)) => self.derived = Arc::clone(&self.baseline),
            Ok(Cow::Owned(derived)) => self.derived = Arc::new(derived),
            Err(err) => {
                LogManager::new("view").caution(&format!("rescale to {population} failed: {err}"));
                return self;
            }
        }
        self.population = population;
        self
    }
}

/// Top-level view state: `Loading -> Ready | LoadFailed`.
#[derive(Debug, Clone, Default)]
pub enum SimulationView {
    #[default]
    Loading,
    Ready(Dashboard),
    LoadFailed(String),
}

impl SimulationView {
    /// Single entry point for every event; state is passed by value.
    pub fn update(self, event: ViewEvent) -> Self {
        match (self, event) {
            (SimulationView::Loading, ViewEvent::Loaded(Ok(snapshot))) => {
                let clients = snapshot.metadata.total_clients;
                match Dashboard::new(snapshot) {
                    Ok(dashboard) => {
                        LogManager::new("view")
                            .record(&format!("baseline ready: {clients} clients"));
                        SimulationView::Ready(dashboard)
                    }
                    Err(err) => Self::load_failed(&err.to_string()),
                }
            }
            (SimulationView::Loading, ViewEvent::Loaded(Err(err))) => Self::load_failed(&err),
            (SimulationView::Ready(dashboard), event) => {
                SimulationView::Ready(Self::update_ready(dashboard, event))
            }
            (state, _) => state,
        }
    }

    fn load_failed(err: &str) -> Self {
        LogManager::new("view").caution(&format!("baseline load failed: {err}"));
        SimulationView::LoadFailed(format!(
            "Failed to load data ({err}). Make sure tamu_simulation_output.json is available."
        ))
    }

    fn update_ready(mut dashboard: Dashboard, event: ViewEvent) -> Dashboard {
        match event {
            ViewEvent::Loaded(_) => {}
            ViewEvent::PopulationChanged(population) => {
                return dashboard.with_population(population);
            }
            ViewEvent::HourSelected(hour) => dashboard.hour = HourIndex::clamped(hour),
            ViewEvent::Tick => {
                if dashboard.playback == Playback::Playing {
                    dashboard.hour = dashboard.hour.advanced();
                }
            }
            ViewEvent::TogglePlayback => {
                dashboard.playback = match dashboard.playback {
                    Playback::Playing => Playback::Paused,
                    Playback::Paused => Playback::Playing,
                };
            }
            ViewEvent::TabSelected(tab) => dashboard.tab = tab,
        }
        dashboard
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            SimulationView::Ready(dashboard) => Some(dashboard),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.dashboard()
            .map(|dashboard| dashboard.playback == Playback::Playing)
            .unwrap_or(false)
    }
}
