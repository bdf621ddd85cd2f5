use canvas::{HeatmapGrid, Timeline, ZoneBars, HEATMAP_ROW_HEIGHT};
use drill_down::{DrillDown, DrillDownMessage};
use fetch::fetch_snapshot;
use iced::{
    time,
    widget::{button, column, row, scrollable, slider, text, Canvas, Column, Container, Row},
    Alignment, Element, Length, Subscription, Task, Theme,
};
use wificore::charts::{
    compact_count, grouped, peak_hour, short_name, timeline_rows, zone_breakdown, zone_cards,
    CampusSummary, Heatmap, ZoneCard,
};
use wificore::processing::{growth_percent, POPULATION_STOPS};
use wificore::snapshot::HourlyStat;
use wificore::view::{Dashboard, Playback, SimulationView, Tab, ViewEvent, TICK_PERIOD};

mod canvas;
mod drill_down;
mod fetch;

fn main() -> iced::Result {
    iced::application(App::boot, App::update, App::view)
        .title(application_title)
        .subscription(application_subscription)
        .theme(application_theme)
        .run()
}

fn application_title(_: &App) -> String {
    "Campus WiFi Network Simulation".into()
}

/// The animation clock only runs while playback is on.
fn application_subscription(state: &App) -> Subscription<Message> {
    if state.view.is_playing() {
        time::every(TICK_PERIOD).map(|_| Message::View(ViewEvent::Tick))
    } else {
        Subscription::none()
    }
}

fn application_theme(_: &App) -> Theme {
    Theme::Dark
}

#[derive(Debug, Default)]
struct App {
    view: SimulationView,
    drill_down: DrillDown,
}

#[derive(Debug, Clone)]
enum Message {
    View(ViewEvent),
    DrillDown(DrillDownMessage),
}

impl App {
    fn boot() -> (Self, Task<Message>) {
        (
            App::default(),
            Task::perform(fetch_snapshot(), |result| {
                Message::View(ViewEvent::Loaded(result))
            }),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::View(event) => {
                let opens_buildings = matches!(event, ViewEvent::TabSelected(Tab::Buildings));
                state.view = std::mem::take(&mut state.view).update(event);
                if opens_buildings {
                    state.drill_down.ensure_index().map(Message::DrillDown)
                } else {
                    Task::none()
                }
            }
            Message::DrillDown(message) => state.drill_down.update(message).map(Message::DrillDown),
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &state.view {
            SimulationView::Loading => text("Loading simulation data...").size(20).into(),
            SimulationView::LoadFailed(message) => column![
                text("Error").size(26),
                text(message.clone()).size(16),
            ]
            .spacing(10)
            .into(),
            SimulationView::Ready(dashboard) => ready_view(dashboard, &state.drill_down),
        };

        Container::new(scrollable(Container::new(content).padding(20)))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn ready_view<'a>(dashboard: &'a Dashboard, drill_down: &'a DrillDown) -> Element<'a, Message> {
    let snapshot = dashboard.snapshot();
    let Some(row_stats) = dashboard.current_row() else {
        return text("No data for the selected hour").size(16).into();
    };
    let summary = CampusSummary::new(row_stats, &snapshot.metadata);
    let baseline_population = dashboard.baseline().metadata.total_clients;

    let header = column![
        text("Texas A&M University WiFi Network Simulation").size(28),
        text(format!(
            "Population: {} ({:+}% growth) | Time: {} | APs: {} {}",
            grouped(dashboard.population()),
            growth_percent(dashboard.population(), baseline_population),
            summary.timestamp,
            grouped(summary.total_aps),
            summary.ap_model
        ))
        .size(14),
    ]
    .spacing(4);

    let tabs = Tab::ALL.iter().fold(Row::new().spacing(6), |tabs, &tab| {
        let label = if tab == dashboard.tab() {
            format!("[{}]", tab.label())
        } else {
            tab.label().to_string()
        };
        tabs.push(
            button(text(label).size(14))
                .on_press(Message::View(ViewEvent::TabSelected(tab)))
                .padding(8),
        )
    });

    let body: Element<'a, Message> = match dashboard.tab() {
        Tab::Overview => overview(dashboard, row_stats),
        Tab::Zones => zones_tab(dashboard, row_stats),
        Tab::Heatmap => heatmap_tab(dashboard),
        Tab::Buildings => drill_down.view().map(Message::DrillDown),
    };

    column![
        header,
        tabs,
        controls(dashboard),
        stat_cards(&summary),
        body
    ]
    .spacing(16)
    .into()
}

fn controls(dashboard: &Dashboard) -> Element<'_, Message> {
    let range = dashboard.population_range();
    let population = slider(
        range.min as u32..=range.max as u32,
        dashboard.population() as u32,
        |value| Message::View(ViewEvent::PopulationChanged(u64::from(value))),
    )
    .step(range.step as u32);

    let stops = POPULATION_STOPS
        .iter()
        .fold(Row::new().spacing(6), |stops, &stop| {
            stops.push(
                button(text(compact_count(stop)).size(12))
                    .on_press(Message::View(ViewEvent::PopulationChanged(stop)))
                    .padding(4),
            )
        });

    let hour = slider(0..=23u8, dashboard.hour().get() as u8, |value| {
        Message::View(ViewEvent::HourSelected(usize::from(value)))
    });
    let playback_label = match dashboard.playback() {
        Playback::Playing => "Pause",
        Playback::Paused => "Play",
    };

    column![
        row![
            text(format!("Student population: {}", grouped(dashboard.population())))
                .size(14)
                .width(Length::Fixed(260.0)),
            population,
            stops
        ]
        .spacing(12)
        .align_y(Alignment::Center),
        row![
            text(format!("Time of day: {:02}:00", dashboard.hour().get()))
                .size(14)
                .width(Length::Fixed(260.0)),
            hour,
            button(playback_label)
                .on_press(Message::View(ViewEvent::TogglePlayback))
                .padding(6)
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    ]
    .spacing(8)
    .into()
}

fn stat_card<'a>(title: &'a str, value: String, detail: String) -> Element<'a, Message> {
    Container::new(column![
        text(title).size(12),
        text(value).size(24),
        text(detail).size(11),
    ])
    .padding(10)
    .width(Length::FillPortion(1))
    .into()
}

fn stat_cards<'a>(summary: &CampusSummary) -> Element<'a, Message> {
    row![
        stat_card(
            "People on WiFi",
            compact_count(summary.people),
            format!("of {} students", grouped(summary.population)),
        ),
        stat_card(
            "Connected Devices",
            compact_count(summary.devices),
            "about 3 per person".into(),
        ),
        stat_card(
            "Avg Network Load",
            format!("{:.1}", summary.avg_load),
            "clients per AP".into(),
        ),
        stat_card(
            "Peak Zone Load",
            format!("{:.1}", summary.peak_load),
            format!("{} zones, {} buildings", summary.zones, summary.buildings),
        ),
    ]
    .spacing(12)
    .into()
}

fn overview<'a>(dashboard: &'a Dashboard, current: &HourlyStat) -> Element<'a, Message> {
    let snapshot = dashboard.snapshot();
    let rows = timeline_rows(snapshot);
    let hour_labels = rows
        .iter()
        .step_by(4)
        .fold(Row::new(), |labels, row| {
            labels.push(text(row.label.clone()).size(11).width(Length::Fill))
        });
    let peak = peak_hour(snapshot)
        .map(|row| {
            format!(
                "Peak hour: {} with {} people online",
                row.timestamp,
                grouped(row.campus_total.active_clients)
            )
        })
        .unwrap_or_default();

    let bars = zone_breakdown(current);
    let bar_labels = bars.iter().fold(Row::new(), |labels, bar| {
        labels.push(
            text(format!("{}\n{}", bar.short_name, compact_count(bar.people)))
                .size(10)
                .width(Length::Fill),
        )
    });

    column![
        text("Network Activity Throughout the Day").size(20),
        Canvas::new(Timeline {
            rows,
            selected_hour: dashboard.hour().get(),
        })
        .width(Length::Fill)
        .height(Length::Fixed(260.0)),
        hour_labels,
        text(peak).size(13),
        text(format!("People on WiFi by Zone at {}", current.timestamp)).size(20),
        Canvas::new(ZoneBars { bars })
            .width(Length::Fill)
            .height(Length::Fixed(220.0)),
        bar_labels,
    ]
    .spacing(8)
    .into()
}

fn zone_card<'a>(card: &ZoneCard) -> Element<'a, Message> {
    Container::new(column![
        text(card.name.clone()).size(16),
        text(format!("{} people", grouped(card.people))).size(14),
        text(format!(
            "{} devices | {} APs",
            grouped(card.devices),
            grouped(card.aps)
        ))
        .size(12),
        text(format!(
            "Load {:.1} | {} buildings active",
            card.avg_load, card.buildings_active
        ))
        .size(12),
    ])
    .padding(10)
    .width(Length::FillPortion(1))
    .into()
}

fn zones_tab<'a>(dashboard: &'a Dashboard, current: &HourlyStat) -> Element<'a, Message> {
    let snapshot = dashboard.snapshot();
    let cards = zone_cards(current, &snapshot.zone_info);
    let grid = cards.chunks(3).fold(Column::new().spacing(10), |grid, chunk| {
        grid.push(
            chunk
                .iter()
                .fold(Row::new().spacing(10), |line, card| line.push(zone_card(card))),
        )
    });

    column![
        text(format!("Campus Zones at {}", current.timestamp)).size(20),
        Canvas::new(ZoneBars {
            bars: zone_breakdown(current),
        })
        .width(Length::Fill)
        .height(Length::Fixed(180.0)),
        grid
    ]
    .spacing(10)
    .into()
}

fn heatmap_tab(dashboard: &Dashboard) -> Element<'_, Message> {
    let heatmap = Heatmap::build(dashboard.snapshot());
    let height = heatmap.zones.len() as f32 * HEATMAP_ROW_HEIGHT;

    let names = heatmap
        .zones
        .iter()
        .fold(Column::new().width(Length::Fixed(140.0)), |names, &zone| {
            names.push(
                Container::new(text(short_name(zone)).size(12))
                    .height(Length::Fixed(HEATMAP_ROW_HEIGHT)),
            )
        });
    let hours = heatmap
        .hour_labels
        .iter()
        .fold(Row::new(), |hours, label| {
            hours.push(text(label.clone()).size(9).width(Length::Fill))
        });
    let peak = format!("Darker cells are busier; busiest cell {} people", grouped(heatmap.max));

    column![
        text("Zone Activity Heatmap").size(20),
        row![
            names,
            column![
                Canvas::new(HeatmapGrid { heatmap })
                    .width(Length::Fill)
                    .height(Length::Fixed(height)),
                hours
            ]
        ],
        text(peak).size(12),
    ]
    .spacing(8)
    .into()
}
