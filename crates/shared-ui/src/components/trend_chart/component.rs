use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdTrendingUp;
use dioxus_free_icons::Icon;
use shared_types::TrendPoint;

use crate::{Card, CardContent, CardHeader, CardTitle};

const WIDTH: f32 = 600.0;
const HEIGHT: f32 = 220.0;
const PAD_LEFT: f32 = 36.0;
const PAD_RIGHT: f32 = 12.0;
const PAD_TOP: f32 = 10.0;
const PAD_BOTTOM: f32 = 24.0;

/// Fixed mmHg range of the y axis.
pub const Y_MIN: u16 = 60;
pub const Y_MAX: u16 = 180;
const Y_TICKS: [u16; 5] = [60, 90, 120, 150, 180];

fn x_at(index: usize, count: usize) -> f32 {
    let span = WIDTH - PAD_LEFT - PAD_RIGHT;
    if count <= 1 {
        PAD_LEFT + span / 2.0
    } else {
        PAD_LEFT + span * index as f32 / (count - 1) as f32
    }
}

fn y_at(value: u16) -> f32 {
    let clamped = value.clamp(Y_MIN, Y_MAX);
    let span = HEIGHT - PAD_TOP - PAD_BOTTOM;
    let ratio = f32::from(clamped - Y_MIN) / f32::from(Y_MAX - Y_MIN);
    HEIGHT - PAD_BOTTOM - span * ratio
}

/// SVG `points` attribute for one series. Values outside the axis range
/// are pinned to the edge.
pub fn polyline_points(values: &[u16]) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{:.1},{:.1}", x_at(i, values.len()), y_at(*v)))
        .collect::<Vec<_>>()
        .join(" ")
}

struct Tick {
    value: u16,
    y: String,
    label_y: String,
}

struct Column {
    label: String,
    x: String,
    sys_y: String,
    dia_y: String,
    tooltip: String,
}

/// Systolic and diastolic lines over labelled points, with reference ranges.
#[component]
pub fn TrendChart(data: Vec<TrendPoint>, #[props(default = "BP Trends".to_string())] title: String) -> Element {
    let systolic: Vec<u16> = data.iter().map(|p| p.systolic).collect();
    let diastolic: Vec<u16> = data.iter().map(|p| p.diastolic).collect();
    let sys_points = polyline_points(&systolic);
    let dia_points = polyline_points(&diastolic);

    let ticks: Vec<Tick> = Y_TICKS
        .iter()
        .map(|&value| Tick {
            value,
            y: format!("{:.1}", y_at(value)),
            label_y: format!("{:.1}", y_at(value) + 3.0),
        })
        .collect();
    let columns: Vec<Column> = data
        .iter()
        .enumerate()
        .map(|(i, p)| Column {
            label: p.label.clone(),
            x: format!("{:.1}", x_at(i, data.len())),
            sys_y: format!("{:.1}", y_at(p.systolic)),
            dia_y: format!("{:.1}", y_at(p.diastolic)),
            tooltip: format!("{}: {}/{}", p.label, p.systolic, p.diastolic),
        })
        .collect();
    let view_box = format!("0 0 {WIDTH} {HEIGHT}");
    let grid_start = PAD_LEFT.to_string();
    let grid_end = (WIDTH - PAD_RIGHT).to_string();
    let axis_y = (HEIGHT - 6.0).to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Card { class: "trend-card",
            CardHeader {
                CardTitle {
                    Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 20, height: 20 }
                    "{title}"
                }
            }
            CardContent {
                if columns.is_empty() {
                    p { class: "trend-empty", "No readings yet" }
                } else {
                    svg {
                        class: "trend-chart",
                        view_box: "{view_box}",
                        preserve_aspect_ratio: "none",
                        role: "img",
                        "aria-label": "{title}",
                        for tick in ticks.iter() {
                            g { key: "y{tick.value}",
                                line {
                                    class: "trend-grid",
                                    x1: "{grid_start}",
                                    x2: "{grid_end}",
                                    y1: "{tick.y}",
                                    y2: "{tick.y}",
                                }
                                text { class: "trend-axis", x: "4", y: "{tick.label_y}", "{tick.value}" }
                            }
                        }
                        for (i, col) in columns.iter().enumerate() {
                            text {
                                key: "x{i}",
                                class: "trend-axis",
                                x: "{col.x}",
                                y: "{axis_y}",
                                text_anchor: "middle",
                                "{col.label}"
                            }
                        }
                        polyline { class: "trend-line systolic", points: "{sys_points}" }
                        polyline { class: "trend-line diastolic", points: "{dia_points}" }
                        for (i, col) in columns.iter().enumerate() {
                            g { key: "p{i}",
                                title { "{col.tooltip}" }
                                circle { class: "trend-dot systolic", cx: "{col.x}", cy: "{col.sys_y}", r: "3" }
                                circle { class: "trend-dot diastolic", cx: "{col.x}", cy: "{col.dia_y}", r: "3" }
                            }
                        }
                    }
                    div { class: "trend-legend",
                        span { class: "trend-key systolic", "Systolic" }
                        span { class: "trend-key diastolic", "Diastolic" }
                    }
                }
                div { class: "trend-ranges",
                    RangeNote { label: "Normal", range: "<120/80", tone: "success" }
                    RangeNote { label: "Elevated", range: "120-129", tone: "warning" }
                    RangeNote { label: "High", range: ">130/80", tone: "danger" }
                }
            }
        }
    }
}

#[component]
fn RangeNote(label: &'static str, range: &'static str, tone: &'static str) -> Element {
    rsx! {
        div { class: "trend-range",
            span { class: "trend-range-label", "{label}" }
            span { class: "trend-range-value", "data-tone": tone, "{range}" }
        }
    }
}
