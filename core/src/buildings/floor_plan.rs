use crate::buildings::document::FloorInfo;

/// Grid spacing drawn under the floor plan, in feet.
pub const GRID_SPACING_FT: f64 = 50.0;

const DEFAULT_WIDTH_FT: f64 = 400.0;
const DEFAULT_HEIGHT_FT: f64 = 300.0;
const MAX_EXTENT_PX: f64 = 800.0;
const MAX_SCALE: f64 = 1.5;

/// Maps floor coordinates in feet onto a drawing surface with y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorPlanLayout {
    pub width_ft: f64,
    pub height_ft: f64,
    pub scale: f64,
}

impl FloorPlanLayout {
    pub fn for_floor(floor: &FloorInfo) -> Self {
        let (width_ft, height_ft) = floor
            .dimensions
            .map(|dims| (dims.width_ft, dims.height_ft))
            .filter(|(w, h)| *w > 0.0 && *h > 0.0)
            .unwrap_or((DEFAULT_WIDTH_FT, DEFAULT_HEIGHT_FT));
        let scale = (MAX_EXTENT_PX / width_ft.max(height_ft)).min(MAX_SCALE);
        Self {
            width_ft,
            height_ft,
            scale,
        }
    }

    pub fn size_px(&self) -> (f64, f64) {
        (self.width_ft * self.scale, self.height_ft * self.scale)
    }

    /// Floor coordinates have their origin bottom-left.
    pub fn project(&self, x_ft: f64, y_ft: f64) -> (f64, f64) {
        let (_, height_px) = self.size_px();
        (x_ft * self.scale, height_px - y_ft * self.scale)
    }

    pub fn grid_step_px(&self) -> f64 {
        GRID_SPACING_FT * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buildings::document::Dimensions;

    fn floor(dimensions: Option<Dimensions>) -> FloorInfo {
        FloorInfo {
            floor_number: 1,
            floor_label: "Level 1".into(),
            dimensions,
            ap_count: 0,
        }
    }

    #[test]
    fn small_floors_cap_at_max_scale() {
        let layout = FloorPlanLayout::for_floor(&floor(None));
        assert_eq!(layout.scale, 1.5);
        assert_eq!(layout.size_px(), (600.0, 450.0));
        assert_eq!(layout.grid_step_px(), 75.0);
    }

    #[test]
    fn large_floors_fit_eight_hundred_pixels() {
        let layout = FloorPlanLayout::for_floor(&floor(Some(Dimensions {
            width_ft: 1600.0,
            height_ft: 400.0,
        })));
        assert_eq!(layout.scale, 0.5);
        assert_eq!(layout.size_px(), (800.0, 200.0));
    }

    #[test]
    fn projection_flips_the_y_axis() {
        let layout = FloorPlanLayout::for_floor(&floor(Some(Dimensions {
            width_ft: 1600.0,
            height_ft: 400.0,
        })));
        assert_eq!(layout.project(0.0, 0.0), (0.0, 200.0));
        assert_eq!(layout.project(100.0, 400.0), (50.0, 0.0));
    }
}
