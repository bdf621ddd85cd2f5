use iced::{
    mouse,
    widget::canvas::{self, Frame, Geometry, Path, Stroke},
    Color, Point, Rectangle, Renderer, Size, Theme,
};
use wificore::buildings::{AccessPoint, BandCoverage, FloorPlanLayout};
use wificore::charts::{zone_color, Heatmap, HeatLevel, TimelineRow, ZoneBar};

const BACKDROP: Color = Color::from_rgb(0.05, 0.05, 0.05);
const MAROON: Color = Color::from_rgb(0.314, 0.0, 0.0);

fn rgb_hex(value: u32) -> Color {
    Color::from_rgb8((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

/// Active clients per zone across the day, with the selected hour marked.
pub struct Timeline {
    pub rows: Vec<TimelineRow>,
    pub selected_hour: usize,
}

impl<Message> canvas::Program<Message> for Timeline {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), BACKDROP);

        if self.rows.len() > 1 {
            let max = self
                .rows
                .iter()
                .flat_map(|row| row.clients_by_zone.iter().map(|(_, clients)| *clients))
                .max()
                .unwrap_or(0)
                .max(1) as f32;
            let step = bounds.width / (self.rows.len() as f32 - 1.0);
            let zones: Vec<_> = self.rows[0]
                .clients_by_zone
                .iter()
                .map(|(zone, _)| *zone)
                .collect();

            for (column, zone) in zones.iter().enumerate() {
                let path = Path::new(|builder| {
                    for (i, row) in self.rows.iter().enumerate() {
                        let clients = row
                            .clients_by_zone
                            .get(column)
                            .map(|(_, clients)| *clients)
                            .unwrap_or(0) as f32;
                        let point = Point::new(
                            i as f32 * step,
                            bounds.height - clients / max * bounds.height,
                        );
                        if i == 0 {
                            builder.move_to(point);
                        } else {
                            builder.line_to(point);
                        }
                    }
                });
                let [r, g, b] = zone_color(*zone);
                frame.stroke(
                    &path,
                    Stroke::default()
                        .with_width(2.0)
                        .with_color(Color::from_rgb(r, g, b)),
                );
            }

            let x = self.selected_hour as f32 * step;
            let marker = Path::new(|builder| {
                builder.move_to(Point::new(x, 0.0));
                builder.line_to(Point::new(x, bounds.height));
            });
            frame.stroke(
                &marker,
                Stroke::default()
                    .with_width(2.0)
                    .with_color(Color::from_rgb(0.95, 0.55, 0.2)),
            );
        }

        vec![frame.into_geometry()]
    }
}

/// People on WiFi per zone at the selected hour.
pub struct ZoneBars {
    pub bars: Vec<ZoneBar>,
}

impl<Message> canvas::Program<Message> for ZoneBars {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), BACKDROP);

        if !self.bars.is_empty() {
            let max = self.bars.iter().map(|bar| bar.people).max().unwrap_or(0).max(1) as f32;
            let slot = bounds.width / self.bars.len() as f32;
            for (i, bar) in self.bars.iter().enumerate() {
                let height = bar.people as f32 / max * (bounds.height - 8.0);
                frame.fill_rectangle(
                    Point::new(i as f32 * slot + slot * 0.15, bounds.height - height),
                    Size::new(slot * 0.7, height),
                    Color::from_rgb(0.6, 0.1, 0.1),
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

pub const HEATMAP_ROW_HEIGHT: f32 = 22.0;

/// Zone x hour activity grid.
pub struct HeatmapGrid {
    pub heatmap: Heatmap,
}

impl<Message> canvas::Program<Message> for HeatmapGrid {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), BACKDROP);

        let hours = self.heatmap.hour_labels.len().max(1) as f32;
        let cell_width = bounds.width / hours;
        for (zone_index, row) in self.heatmap.cells.iter().enumerate() {
            for hour in 0..row.len() {
                let level: HeatLevel = self.heatmap.level(zone_index, hour);
                frame.fill_rectangle(
                    Point::new(
                        hour as f32 * cell_width + 1.0,
                        zone_index as f32 * HEATMAP_ROW_HEIGHT + 1.0,
                    ),
                    Size::new(cell_width - 2.0, HEATMAP_ROW_HEIGHT - 2.0),
                    rgb_hex(level.rgb()),
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Access points of one floor drawn over a 50 ft grid.
pub struct FloorPlan {
    pub layout: FloorPlanLayout,
    pub access_points: Vec<AccessPoint>,
}

impl FloorPlan {
    pub fn size(&self) -> (f32, f32) {
        let (width, height) = self.layout.size_px();
        (width as f32, height as f32)
    }
}

fn coverage_color(coverage: BandCoverage) -> Color {
    match coverage {
        BandCoverage::DualBand => rgb_hex(0xFF6B6B),
        BandCoverage::FiveGhzOnly => rgb_hex(0x00FF00),
        BandCoverage::TwoFourGhzOnly => rgb_hex(0xFFBF00),
        BandCoverage::Off => Color::from_rgb(0.5, 0.5, 0.5),
    }
}

impl<Message> canvas::Program<Message> for FloorPlan {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), MAROON);

        let (width, height) = self.size();
        let grid_step = self.layout.grid_step_px() as f32;
        if grid_step > 1.0 {
            let grid = Path::new(|builder| {
                let mut x = 0.0;
                while x <= width {
                    builder.move_to(Point::new(x, 0.0));
                    builder.line_to(Point::new(x, height));
                    x += grid_step;
                }
                let mut y = 0.0;
                while y <= height {
                    builder.move_to(Point::new(0.0, y));
                    builder.line_to(Point::new(width, y));
                    y += grid_step;
                }
            });
            frame.stroke(
                &grid,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(Color::from_rgba(1.0, 1.0, 1.0, 0.1)),
            );
        }

        for ap in &self.access_points {
            let (x, y) = self.layout.project(ap.location.x, ap.location.y);
            let center = Point::new(x as f32, y as f32);
            let coverage = BandCoverage::of(ap);
            let color = coverage_color(coverage);

            let halo = Path::new(|builder| builder.circle(center, 40.0));
            frame.fill(&halo, Color { a: 0.1, ..color });

            let dot = Path::new(|builder| builder.circle(center, 8.0));
            frame.fill(&dot, color);
            frame.stroke(&dot, Stroke::default().with_width(2.0).with_color(Color::WHITE));

            if coverage == BandCoverage::DualBand {
                let core = Path::new(|builder| builder.circle(center, 4.0));
                frame.fill(&core, Color::WHITE);
            }
        }

        vec![frame.into_geometry()]
    }
}
