//! Chart-ready rows derived from a (scaled) snapshot.

pub mod format;
pub mod heatmap;
pub mod rows;
pub mod zones;

pub use format::{compact_count, grouped};
pub use heatmap::{uses_light_text, HeatLevel, Heatmap};
pub use rows::{
    peak_hour, timeline_rows, zone_breakdown, zone_cards, CampusSummary, TimelineRow, ZoneBar,
    ZoneCard,
};
pub use zones::{short_name, zone_color, zone_name};
