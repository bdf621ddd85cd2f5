//! Model-update state for the dashboard and the animation task feeding it.

pub mod player;
pub mod state;

pub use player::{Player, TICK_PERIOD};
pub use state::{Dashboard, Playback, SimulationView, Tab, ViewEvent};
