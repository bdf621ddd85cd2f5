pub mod population;
pub mod scaling;
pub mod timeline;

pub use population::{growth_percent, PopulationRange, POPULATION_STOPS};
pub use scaling::{scale, scale_factor};
pub use timeline::{advance_hour, select_hour, HourIndex};
