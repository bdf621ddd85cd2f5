use crate::prelude::ZoneId;

const ZONE_NAMES: [&str; 12] = [
    "West Campus",
    "Central Campus",
    "North Campus",
    "South Campus",
    "East Campus",
    "Research Park",
    "Riverside",
    "Health Science Center",
    "RELLIS Campus",
    "Athletics District",
    "Satellite Facilities",
    "South College Station",
];

/// Display name of a zone, falling back to `Zone <id>`.
pub fn zone_name(zone: ZoneId) -> String {
    zone.checked_sub(1)
        .and_then(|index| ZONE_NAMES.get(index as usize))
        .map(|name| name.to_string())
        .unwrap_or_else(|| format!("Zone {}", zone))
}

/// Axis label used where horizontal space is tight.
pub fn short_name(zone: ZoneId) -> String {
    zone_name(zone).replace(" Campus", "")
}

/// Series colors for the timeline, as RGB triples in `0.0..=1.0`.
pub fn zone_color(zone: ZoneId) -> [f32; 3] {
    const PALETTE: [[u8; 3]; 12] = [
        [0x50, 0x00, 0x00],
        [0xD4, 0xA0, 0x17],
        [0x1B, 0x5E, 0x20],
        [0x0D, 0x47, 0xA1],
        [0xE6, 0x51, 0x00],
        [0x6A, 0x1B, 0x9A],
        [0x00, 0x83, 0x8F],
        [0xC6, 0x28, 0x28],
        [0x37, 0x47, 0x4F],
        [0xAD, 0x14, 0x57],
        [0x9E, 0x9E, 0x9E],
        [0x33, 0x69, 0x1E],
    ];
    let rgb = zone
        .checked_sub(1)
        .and_then(|index| PALETTE.get(index as usize))
        .copied()
        .unwrap_or([0x88, 0x88, 0x88]);
    rgb.map(|channel| channel as f32 / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_zone_names() {
        assert_eq!(zone_name(1), "West Campus");
        assert_eq!(zone_name(12), "South College Station");
        assert_eq!(zone_name(0), "Zone 0");
        assert_eq!(zone_name(13), "Zone 13");
    }

    #[test]
    fn short_names_drop_campus_suffix() {
        assert_eq!(short_name(2), "Central");
        assert_eq!(short_name(8), "Health Science Center");
    }

    #[test]
    fn unknown_zone_gets_neutral_color() {
        assert_eq!(zone_color(1), [0x50 as f32 / 255.0, 0.0, 0.0]);
        let grey = 0x88 as f32 / 255.0;
        assert_eq!(zone_color(40), [grey, grey, grey]);
    }
}
