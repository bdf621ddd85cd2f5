use anyhow::Context;
use clap::Parser;
use gui_bridge::bridge::GuiBridge;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::DashboardConfig;
use workflow::runner::Runner;

mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Campus WiFi simulation data driver")]
struct Args {
    /// Print a report for one hour at the chosen population
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Animate the day in the terminal for this many hours
    #[arg(long)]
    play: Option<usize>,
    /// Load settings from YAML instead of the flags below
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "public/tamu_simulation_output.json")]
    data_file: PathBuf,
    #[arg(long, default_value = "public/data")]
    data_dir: PathBuf,
    #[arg(long)]
    population: Option<u64>,
    #[arg(long, default_value_t = 10)]
    hour: usize,
    #[arg(long, default_value_t = 9000)]
    port: u16,
    /// Append the offline report to this file
    #[arg(long)]
    report: Option<PathBuf>,
    /// Host the data set for the dashboard until Ctrl+C
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.config {
        DashboardConfig::load(path)?
    } else {
        DashboardConfig::from_args(
            args.data_file,
            args.data_dir,
            args.population,
            args.hour,
            args.port,
        )
    };

    let runner = Runner::load(&config)?;

    if args.offline {
        let report = runner.execute(config.population, config.hour)?.render();
        print!("{}", report);

        if let Some(report_path) = args.report {
            if let Some(parent) = report_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&report_path)
                .with_context(|| format!("opening report {}", report_path.display()))?;
            file.write_all(report.as_bytes())?;
        }
    }

    if args.play.is_some() || args.serve {
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime")?;

        if let Some(ticks) = args.play {
            runtime.block_on(workflow::playback::play(&runner, &config, ticks))?;
        }

        if args.serve {
            let gui_bridge = GuiBridge::new(Arc::new(runner.clone()), &config.data_dir, config.port);
            gui_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
            runtime.block_on(async {
                signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
                Ok::<(), anyhow::Error>(())
            })?;
        }
    }

    Ok(())
}
