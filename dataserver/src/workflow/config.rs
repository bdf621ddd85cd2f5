use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Simulation output produced by the external simulator run.
    pub data_file: PathBuf,
    /// Root of the building drill-down documents, hosted under `/data`.
    pub data_dir: PathBuf,
    /// Population to report on; the snapshot baseline when unset.
    pub population: Option<u64>,
    pub hour: usize,
    pub port: u16,
    pub tick_millis: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("public/tamu_simulation_output.json"),
            data_dir: PathBuf::from("public/data"),
            population: None,
            hour: 10,
            port: 9000,
            tick_millis: 1000,
        }
    }
}

impl DashboardConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading dashboard config {}", path_ref.display()))?;
        let config: DashboardConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing dashboard config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        data_file: PathBuf,
        data_dir: PathBuf,
        population: Option<u64>,
        hour: usize,
        port: u16,
    ) -> Self {
        Self {
            data_file,
            data_dir,
            population,
            hour,
            port,
            ..Default::default()
        }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_keeps_default_tick() {
        let cfg = DashboardConfig::from_args(
            "out.json".into(),
            "data".into(),
            Some(120_000),
            3,
            8080,
        );
        assert_eq!(cfg.population, Some(120_000));
        assert_eq!(cfg.tick_period(), Duration::from_secs(1));
    }

    #[test]
    fn config_load_reads_yaml_with_defaults() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"data_file: sim.json\npopulation: 100000\ntick_millis: 250\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = DashboardConfig::load(&path).unwrap();
        assert_eq!(cfg.data_file, PathBuf::from("sim.json"));
        assert_eq!(cfg.population, Some(100_000));
        assert_eq!(cfg.hour, 10);
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.tick_period(), Duration::from_millis(250));
    }

    #[test]
    fn config_load_rejects_bad_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"hour: [not, a, number]\n").unwrap();
        let path = temp.into_temp_path();
        assert!(DashboardConfig::load(&path).is_err());
    }
}
