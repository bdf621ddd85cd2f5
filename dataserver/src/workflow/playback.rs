use crate::workflow::config::DashboardConfig;
use crate::workflow::runner::Runner;
use log::{info, warn};
use tokio::sync::mpsc;
use wificore::charts::grouped;
use wificore::processing::PopulationRange;
use wificore::view::{Player, SimulationView, ViewEvent};

/// Population the animation runs at. The view only accepts slider values, so
/// a requested population outside that domain is clamped and reported.
pub fn playback_population(runner: &Runner, config: &DashboardConfig) -> u64 {
    let requested = config
        .population
        .unwrap_or(runner.baseline().metadata.total_clients);
    let range = PopulationRange::default();
    let population = range.clamp(requested);
    if population != requested {
        warn!(
            "population {} is outside {}..={} step {}; playing at {}",
            requested, range.min, range.max, range.step, population
        );
    }
    population
}

/// Plays the day in the terminal, one line per simulated hour, until `ticks`
/// hours have been shown or Ctrl+C is pressed.
pub async fn play(runner: &Runner, config: &DashboardConfig, ticks: usize) -> anyhow::Result<()> {
    let (events, mut inbox) = mpsc::unbounded_channel();
    let mut view = SimulationView::default()
        .update(ViewEvent::Loaded(Ok(runner.baseline().clone())))
        .update(ViewEvent::PopulationChanged(playback_population(runner, config)))
        .update(ViewEvent::HourSelected(config.hour))
        .update(ViewEvent::TogglePlayback);

    let mut player = Player::new(config.tick_period());
    match &view {
        SimulationView::Ready(dashboard) => player.sync(dashboard.playback(), &events),
        SimulationView::LoadFailed(message) => anyhow::bail!("{}", message),
        SimulationView::Loading => anyhow::bail!("baseline never loaded"),
    }
    print_row(&view);

    let mut shown = 0;
    while shown < ticks {
        tokio::select! {
            event = inbox.recv() => {
                let Some(event) = event else { break };
                view = view.update(event);
                print_row(&view);
                shown += 1;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("playback interrupted");
                break;
            }
        }
    }

    player.stop();
    Ok(())
}

fn print_row(view: &SimulationView) {
    if let Some(row) = view.dashboard().and_then(|dashboard| dashboard.current_row()) {
        println!(
            "{}  {:>8} people  {:>9} devices  {:>6.1} avg/AP  {:>6.1} peak/AP",
            row.timestamp,
            grouped(row.campus_total.active_clients),
            grouped(row.campus_total.total_devices),
            row.campus_total.avg_zone_load,
            row.campus_total.max_zone_load
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::runner::tests::small_snapshot;

    #[test]
    fn playback_population_clamps_to_slider_domain() {
        let runner = Runner::new(small_snapshot()).unwrap();
        let mut config = DashboardConfig::default();
        assert_eq!(playback_population(&runner, &config), 90_000);

        config.population = Some(500_000);
        assert_eq!(playback_population(&runner, &config), 140_000);

        config.population = Some(123_400);
        assert_eq!(playback_population(&runner, &config), 123_000);
    }

    #[tokio::test]
    async fn playback_stops_after_requested_ticks() {
        let runner = Runner::new(small_snapshot()).unwrap();
        let config = DashboardConfig {
            tick_millis: 5,
            hour: 22,
            ..Default::default()
        };
        let finished =
            tokio::time::timeout(std::time::Duration::from_secs(5), play(&runner, &config, 3))
                .await;
        assert!(finished.unwrap().is_ok());
    }
}
