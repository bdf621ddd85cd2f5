use crate::canvas::FloorPlan;
use crate::fetch::{fetch_building, fetch_building_index, BuildingData};
use iced::{
    widget::{button, column, row, scrollable, text, Canvas, Column, Container, Row},
    Element, Length, Task,
};
use std::sync::Arc;
use wificore::buildings::{
    access_points_on_floor, channel_distribution, AccessPoint, Band, BuildingIndex,
    FloorPlanLayout,
};
use wificore::charts::grouped;

/// Independent load lifecycle of one secondary document.
#[derive(Debug, Default)]
enum Fetch<T> {
    #[default]
    NotStarted,
    Loading,
    Loaded(T),
    Failed(String),
}

#[derive(Debug)]
struct OpenBuilding {
    id: String,
    data: Fetch<Arc<BuildingData>>,
    floor: Option<i32>,
}

#[derive(Debug, Default)]
pub struct DrillDown {
    index: Fetch<BuildingIndex>,
    open: Option<OpenBuilding>,
}

#[derive(Debug, Clone)]
pub enum DrillDownMessage {
    IndexFetched(Result<BuildingIndex, String>),
    Open(String),
    BuildingFetched(String, Result<Arc<BuildingData>, String>),
    FloorSelected(Option<i32>),
    Back,
}

impl DrillDown {
    /// Fetches the building list the first time the tab is shown.
    pub fn ensure_index(&mut self) -> Task<DrillDownMessage> {
        if matches!(self.index, Fetch::NotStarted) {
            self.index = Fetch::Loading;
            Task::perform(fetch_building_index(), DrillDownMessage::IndexFetched)
        } else {
            Task::none()
        }
    }

    pub fn update(&mut self, message: DrillDownMessage) -> Task<DrillDownMessage> {
        match message {
            DrillDownMessage::IndexFetched(Ok(index)) => {
                self.index = Fetch::Loaded(index);
                Task::none()
            }
            DrillDownMessage::IndexFetched(Err(err)) => {
                self.index = Fetch::Failed(format!("Failed to load building list: {err}"));
                Task::none()
            }
            DrillDownMessage::Open(id) => {
                self.open = Some(OpenBuilding {
                    id: id.clone(),
                    data: Fetch::Loading,
                    floor: None,
                });
                let building = id.clone();
                Task::perform(fetch_building(id), move |result| {
                    DrillDownMessage::BuildingFetched(building.clone(), result)
                })
            }
            DrillDownMessage::BuildingFetched(id, result) => {
                if let Some(open) = self.open.as_mut().filter(|open| open.id == id) {
                    match result {
                        Ok(data) => {
                            open.floor = data.document.default_floor();
                            open.data = Fetch::Loaded(data);
                        }
                        Err(err) => open.data = Fetch::Failed(err),
                    }
                }
                Task::none()
            }
            DrillDownMessage::FloorSelected(floor) => {
                if let Some(open) = self.open.as_mut() {
                    open.floor = floor;
                }
                Task::none()
            }
            DrillDownMessage::Back => {
                self.open = None;
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, DrillDownMessage> {
        if let Some(open) = &self.open {
            return building_view(open);
        }

        match &self.index {
            Fetch::NotStarted | Fetch::Loading => text("Loading buildings...").size(16).into(),
            Fetch::Failed(err) => text(err.clone()).size(16).into(),
            Fetch::Loaded(index) if index.buildings.is_empty() => {
                text("No buildings available").size(16).into()
            }
            Fetch::Loaded(index) => {
                let cards = index.buildings.iter().fold(
                    Column::new().spacing(8),
                    |col, building| {
                        let status = if building.enabled {
                            "Active"
                        } else {
                            "Inactive"
                        };
                        col.push(
                            button(column![
                                text(building.name.clone()).size(16),
                                text(format!(
                                    "{} | {} | {}",
                                    building.zone_name, building.id, status
                                ))
                                .size(12),
                            ])
                            .on_press(DrillDownMessage::Open(building.id.clone()))
                            .width(Length::Fill)
                            .padding(8),
                        )
                    },
                );
                column![
                    text("Building Analysis").size(22),
                    text("Select a building to view floor plans and access point locations")
                        .size(12),
                    scrollable(cards).height(Length::Fixed(480.0)),
                ]
                .spacing(10)
                .into()
            }
        }
    }
}

fn back_button<'a>() -> Element<'a, DrillDownMessage> {
    button("Back to buildings")
        .on_press(DrillDownMessage::Back)
        .padding(6)
        .into()
}

fn building_view(open: &OpenBuilding) -> Element<'_, DrillDownMessage> {
    let data = match &open.data {
        Fetch::NotStarted | Fetch::Loading => {
            return text("Loading building data...").size(16).into();
        }
        Fetch::Failed(err) => {
            return column![
                text("Error loading building").size(20),
                text(err.clone()).size(14),
                back_button(),
            ]
            .spacing(8)
            .into();
        }
        Fetch::Loaded(data) => data,
    };

    let info = &data.document.building_info;
    let floors = &data.document.floor_info;
    let aps = &data.access_points;
    let total_aps = data
        .document
        .network_info
        .as_ref()
        .map(|network| network.total_aps as usize)
        .filter(|&count| count > 0)
        .unwrap_or(aps.len());
    let location = info
        .coordinates
        .as_ref()
        .map(|c| format!("{:.4}, {:.4}", c.lat, c.lng))
        .unwrap_or_else(|| "N/A".into());
    let area = info
        .square_feet
        .map(grouped)
        .unwrap_or_else(|| "N/A".into());

    let header = column![
        back_button(),
        text(info.name.clone()).size(24),
        text(format!(
            "Zone {} | {} | {}",
            info.zone_id.map(|id| id.to_string()).unwrap_or_default(),
            info.zone_name,
            info.building_type
        ))
        .size(12),
        text(format!(
            "{} floors ({} plans) | {} access points | {} sq ft | {}",
            info.floors,
            floors.len(),
            total_aps,
            area,
            location
        ))
        .size(14),
    ]
    .spacing(6);

    let floor_buttons = floors.chunks(6).fold(Column::new().spacing(6), |grid, chunk| {
        grid.push(chunk.iter().fold(Row::new().spacing(6), |line, floor| {
            let count = access_points_on_floor(aps, floor.floor_number).len();
            let marker = if open.floor == Some(floor.floor_number) {
                "* "
            } else {
                ""
            };
            line.push(
                button(text(format!("{}{} ({} APs)", marker, floor.floor_label, count)).size(12))
                    .on_press(DrillDownMessage::FloorSelected(Some(floor.floor_number)))
                    .padding(6),
            )
        }))
    });

    let current_floor = open
        .floor
        .and_then(|number| data.document.floor(number));
    let shown: Vec<&AccessPoint> = match open.floor {
        Some(number) => access_points_on_floor(aps, number),
        None => aps.iter().collect(),
    };

    let plan: Element<'_, DrillDownMessage> = match current_floor {
        Some(floor) => {
            let layout = FloorPlanLayout::for_floor(floor);
            let program = FloorPlan {
                layout,
                access_points: shown.iter().map(|ap| (*ap).clone()).collect(),
            };
            let (width, height) = program.size();
            column![
                text(format!("{} - Floor Plan ({} APs)", floor.floor_label, shown.len())).size(16),
                Canvas::new(program)
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(height)),
                text("Green: 5 GHz only | Amber: 2.4 GHz only | Red: dual band | Grid: 50 ft")
                    .size(11),
            ]
            .spacing(6)
            .into()
        }
        None => button("Show first floor")
            .on_press(DrillDownMessage::FloorSelected(data.document.default_floor()))
            .into(),
    };

    let inventory = shown.iter().fold(Column::new().spacing(2), |col, ap| {
        col.push(
            text(format!(
                "{:<10} {:<18} floor {:>2}  ({:.1}, {:.1})  {:.1} ft  2.4: {}  5: {}",
                ap.ap_id,
                ap.name,
                ap.floor,
                ap.location.x,
                ap.location.y,
                ap.location.height_ft,
                radio_label(ap, Band::TwoFourGhz),
                radio_label(ap, Band::FiveGhz)
            ))
            .size(11),
        )
    });

    let show_all: Element<'_, DrillDownMessage> = if open.floor.is_some() {
        button("Show all floors")
            .on_press(DrillDownMessage::FloorSelected(None))
            .padding(4)
            .into()
    } else {
        text("").into()
    };

    column![
        header,
        text("Floor Selection").size(18),
        floor_buttons,
        plan,
        row![
            text(format!("Access Point Inventory ({} shown)", shown.len())).size(18),
            show_all
        ]
        .spacing(12),
        Container::new(scrollable(inventory).height(Length::Fixed(180.0))).padding(6),
        text("Channel Distribution").size(18),
        row![
            channel_column("2.4 GHz", aps, Band::TwoFourGhz),
            channel_column("5 GHz", aps, Band::FiveGhz),
        ]
        .spacing(40),
    ]
    .spacing(10)
    .into()
}

fn radio_label(ap: &AccessPoint, band: Band) -> String {
    ap.radio_config
        .enabled(band)
        .map(|radio| format!("Ch {} @ {} dBm", radio.channel, radio.power_dbm))
        .unwrap_or_else(|| "Off".into())
}

fn channel_column<'a>(
    title: &'a str,
    aps: &[AccessPoint],
    band: Band,
) -> Element<'a, DrillDownMessage> {
    let distribution = channel_distribution(aps, band);
    let widest = distribution.values().copied().max().unwrap_or(1).max(1);
    distribution
        .into_iter()
        .fold(
            Column::new().spacing(2).push(text(title).size(14)),
            |col, (channel, count)| {
                let bar = "#".repeat((count * 20).div_ceil(widest));
                col.push(text(format!("Ch {:>3} {:<20} {}", channel, bar, count)).size(11))
            },
        )
        .into()
}
