//! Inline SVG charts for the sample datasets. The charting surface only knows
//! about labelled `(x, y)` series; data selection lives in the views.

use dioxus::prelude::*;

const VIEW_W: f64 = 640.0;
const VIEW_H: f64 = 260.0;
const PAD_LEFT: f64 = 48.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 14.0;
const PAD_BOTTOM: f64 = 30.0;

const PALETTE: &[&str] = &["#667eea", "#764ba2", "#28a745", "#e0a13c"];

/// One named line on a [`LineChart`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// Vertical bar chart over `(label, value)` pairs.
#[component]
pub fn BarChart(title: String, series: Vec<(String, f64)>) -> Element {
    let max = axis_max(series.iter().map(|(_, v)| *v));
    let plot_w = VIEW_W - PAD_LEFT - PAD_RIGHT;
    let plot_h = VIEW_H - PAD_TOP - PAD_BOTTOM;
    let slot = if series.is_empty() {
        plot_w
    } else {
        plot_w / series.len() as f64
    };

    rsx! {
        figure { class: "chart chart--bar",
            figcaption { class: "chart__title", "{title}" }
            svg {
                view_box: "0 0 {VIEW_W} {VIEW_H}",
                role: "img",
                "aria-label": "{title}",
                {axis_frame(max)}
                for (i, (label, value)) in series.iter().enumerate() {
                    {
                        let height = (value / max) * plot_h;
                        let x = PAD_LEFT + slot * i as f64 + slot * 0.2;
                        let y = PAD_TOP + plot_h - height;
                        let color = PALETTE[i % PALETTE.len()];
                        let label_x = PAD_LEFT + slot * (i as f64 + 0.5);
                        rsx! {
                            rect {
                                key: "{label}",
                                x: "{x}",
                                y: "{y}",
                                width: "{slot * 0.6}",
                                height: "{height}",
                                rx: "3",
                                fill: "{color}",
                            }
                            text {
                                x: "{label_x}",
                                y: "{VIEW_H - 8.0}",
                                class: "chart__tick",
                                text_anchor: "middle",
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Multi-series line chart; `labels` provide the x-axis ticks.
#[component]
pub fn LineChart(title: String, labels: Vec<String>, series: Vec<ChartSeries>) -> Element {
    let max = axis_max(series.iter().flat_map(|s| s.values.iter().copied()));
    let tick_step = (labels.len() / 6).max(1);

    rsx! {
        figure { class: "chart chart--line",
            figcaption { class: "chart__title", "{title}" }
            svg {
                view_box: "0 0 {VIEW_W} {VIEW_H}",
                role: "img",
                "aria-label": "{title}",
                {axis_frame(max)}
                for (i, line) in series.iter().enumerate() {
                    polyline {
                        key: "{line.name}",
                        points: "{polyline_points(&line.values, max)}",
                        fill: "none",
                        stroke: "{PALETTE[i % PALETTE.len()]}",
                        stroke_width: "2.5",
                    }
                }
                for (i, label) in labels.iter().enumerate().step_by(tick_step) {
                    text {
                        key: "{label}",
                        x: "{x_position(i, labels.len())}",
                        y: "{VIEW_H - 8.0}",
                        class: "chart__tick",
                        text_anchor: "middle",
                        "{label}"
                    }
                }
            }
            if series.len() > 1 {
                ul { class: "chart__legend",
                    for (i, line) in series.iter().enumerate() {
                        li { key: "{line.name}",
                            span {
                                class: "chart__legend-swatch",
                                style: "background: {PALETTE[i % PALETTE.len()]}",
                            }
                            "{line.name}"
                        }
                    }
                }
            }
        }
    }
}

/// Shared y-axis frame: baseline, top gridline, and the two scale labels.
fn axis_frame(max: f64) -> Element {
    let base_y = VIEW_H - PAD_BOTTOM;
    rsx! {
        line {
            x1: "{PAD_LEFT}",
            y1: "{base_y}",
            x2: "{VIEW_W - PAD_RIGHT}",
            y2: "{base_y}",
            class: "chart__axis",
        }
        line {
            x1: "{PAD_LEFT}",
            y1: "{PAD_TOP}",
            x2: "{VIEW_W - PAD_RIGHT}",
            y2: "{PAD_TOP}",
            class: "chart__grid",
        }
        text {
            x: "{PAD_LEFT - 6.0}",
            y: "{base_y}",
            class: "chart__tick",
            text_anchor: "end",
            "0"
        }
        text {
            x: "{PAD_LEFT - 6.0}",
            y: "{PAD_TOP + 4.0}",
            class: "chart__tick",
            text_anchor: "end",
            "{max:.0}"
        }
    }
}

/// Round the data maximum up to a tidy axis ceiling; never below 1.
fn axis_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.filter(|v| v.is_finite()).fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10_f64.powf(max.log10().floor());
    (max / magnitude).ceil() * magnitude
}

/// Evenly spaced x coordinate for point `i` of `n`.
fn x_position(i: usize, n: usize) -> f64 {
    let plot_w = VIEW_W - PAD_LEFT - PAD_RIGHT;
    if n <= 1 {
        return PAD_LEFT + plot_w / 2.0;
    }
    PAD_LEFT + plot_w * i as f64 / (n - 1) as f64
}

/// `points` attribute payload for an SVG polyline over `values`.
fn polyline_points(values: &[f64], max: f64) -> String {
    let plot_h = VIEW_H - PAD_TOP - PAD_BOTTOM;
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = x_position(i, values.len());
            let y = PAD_TOP + plot_h * (1.0 - (value / max).clamp(0.0, 1.0));
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}
