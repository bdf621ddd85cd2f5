use crate::view::state::{Playback, ViewEvent};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// Animation period: one simulated hour per second.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Cancellable periodic task that posts [`ViewEvent::Tick`] while running.
///
/// Must be started from within a tokio runtime.
pub struct Player {
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl Player {
    pub fn new(period: Duration) -> Self {
        Self { period, task: None }
    }

    /// No-op when already running.
    pub fn start(&mut self, events: UnboundedSender<ViewEvent>) {
        if self.is_running() {
            return;
        }
        let period = self.period;
        self.task = Some(tokio::spawn(async move {
            let mut ticker = time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if events.send(ViewEvent::Tick).is_err() {
                    break;
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Starts or stops the task so it matches the view's playback state.
    pub fn sync(&mut self, playback: Playback, events: &UnboundedSender<ViewEvent>) {
        match playback {
            Playback::Playing => self.start(events.clone()),
            Playback::Paused => self.stop(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.task
            .as_ref()
            .map(|task| !task.is_finished())
            .unwrap_or(false)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.stop();
    }
}
