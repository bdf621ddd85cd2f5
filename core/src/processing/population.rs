use serde::{Deserialize, Serialize};

/// Quick-select stops offered next to the population slider.
pub const POPULATION_STOPS: [u64; 4] = [90_000, 100_000, 120_000, 140_000];

/// Domain of the population selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationRange {
    pub min: u64,
    pub max: u64,
    pub step: u64,
}

impl Default for PopulationRange {
    fn default() -> Self {
        Self {
            min: 90_000,
            max: 140_000,
            step: 1_000,
        }
    }
}

impl PopulationRange {
    /// Brings raw slider input into range and snaps it to the nearest step.
    pub fn clamp(&self, population: u64) -> u64 {
        let bounded = population.clamp(self.min, self.max);
        if self.step == 0 {
            return bounded;
        }
        let offset = bounded - self.min;
        let snapped = self.min + ((offset + self.step / 2) / self.step) * self.step;
        snapped.min(self.max)
    }

    pub fn contains(&self, population: u64) -> bool {
        (self.min..=self.max).contains(&population)
    }
}

/// Whole-percent growth over the baseline population, as shown in the header.
pub fn growth_percent(population: u64, baseline: u64) -> i64 {
    if baseline == 0 {
        return 0;
    }
    ((population as f64 - baseline as f64) / baseline as f64 * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds_and_snaps() {
        let range = PopulationRange::default();
        assert_eq!(range.clamp(10), 90_000);
        assert_eq!(range.clamp(500_000), 140_000);
        assert_eq!(range.clamp(120_499), 120_000);
        assert_eq!(range.clamp(120_500), 121_000);
    }

    #[test]
    fn stops_lie_inside_default_range() {
        let range = PopulationRange::default();
        assert!(POPULATION_STOPS.iter().all(|&stop| range.contains(stop)));
    }

    #[test]
    fn growth_is_relative_to_baseline() {
        assert_eq!(growth_percent(90_000, 90_000), 0);
        assert_eq!(growth_percent(120_000, 90_000), 33);
        assert_eq!(growth_percent(140_000, 90_000), 56);
    }
}
