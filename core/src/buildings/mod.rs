//! Building drill-down documents: index, floor surveys and AP placement.

pub mod access_points;
pub mod document;
pub mod floor_plan;
pub mod index;

pub use access_points::{
    access_points_on_floor, channel_distribution, AccessPoint, ApLocation, ApLocations, Band,
    BandCoverage, BuildingAccessPoints, Radio, RadioConfig,
};
pub use document::{BuildingDocument, BuildingInfo, Coordinates, Dimensions, FloorInfo, NetworkInfo};
pub use floor_plan::{FloorPlanLayout, GRID_SPACING_FT};
pub use index::{BuildingEntry, BuildingIndex};
