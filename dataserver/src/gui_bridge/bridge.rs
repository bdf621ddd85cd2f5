use crate::gui_bridge::model::DatasetStatus;
use crate::workflow::runner::Runner;
use log::{error, info};
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
    thread,
};
use tokio::runtime::Builder;
use warp::{Filter, Rejection, Reply};

/// Fixed path the dashboard fetches the baseline from.
pub const SNAPSHOT_ROUTE: &str = "tamu_simulation_output.json";

fn gui_bind_address(port: u16) -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], port))
}

/// Snapshot, status and drill-down document routes.
pub fn routes(
    runner: Arc<Runner>,
    data_dir: PathBuf,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let drill_down_available = data_dir.is_dir();
    let runner_filter = warp::any().map(move || runner.clone());

    let snapshot_route = warp::path(SNAPSHOT_ROUTE)
        .and(warp::path::end())
        .and(warp::get())
        .and(runner_filter.clone())
        .map(|runner: Arc<Runner>| warp::reply::json(&**runner.baseline()));

    let status_route = warp::path("status")
        .and(warp::path::end())
        .and(warp::get())
        .and(runner_filter)
        .map(move |runner: Arc<Runner>| {
            warp::reply::json(&DatasetStatus::describe(
                runner.baseline(),
                drill_down_available,
            ))
        });

    let data_route = warp::path("data").and(warp::fs::dir(data_dir));

    snapshot_route.or(status_route).or(data_route)
}

/// Hosts the static data set for the dashboard on a background thread.
pub struct GuiBridge {
    address: SocketAddr,
}

impl GuiBridge {
    pub fn new(runner: Arc<Runner>, data_dir: &Path, port: u16) -> Self {
        let address = gui_bind_address(port);
        let routes = routes(runner, data_dir.to_path_buf());

        thread::spawn(move || {
            let runtime = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime,
                Err(err) => {
                    error!("failed to build bridge runtime: {}", err);
                    return;
                }
            };
            runtime.block_on(async move {
                warp::serve(routes).run(address).await;
            });
        });

        info!("serving dashboard data on http://{}", address);
        Self { address }
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GUI] {} ({})", message, self.address);
    }
}
