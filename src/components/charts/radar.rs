use std::f64::consts::{FRAC_PI_2, TAU};

use dioxus::prelude::*;

use super::scale::{nice_ceiling, points_attr};
use super::{Legend, LegendEntry};
use crate::shared::theme::{Color, BORDER, MUTED, TEXT};
use crate::utils::format::format_number;

const BOX_W: f64 = 360.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub color: Color,
    /// Fill alpha, 0-255.
    pub fill_alpha: u8,
}

impl RadarSeries {
    pub fn new(name: &str, values: Vec<f64>, color: Color, fill_alpha: u8) -> Self {
        Self {
            name: name.to_string(),
            values,
            color,
            fill_alpha,
        }
    }
}

/// Vertex of axis `index` of `count` at radius `r`, first axis at 12 o'clock.
fn spoke(cx: f64, cy: f64, r: f64, index: usize, count: usize) -> (f64, f64) {
    let angle = (index as f64 / count.max(1) as f64) * TAU - FRAC_PI_2;
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Polygon vertices for one series on a radius domain `[0, max]`.
pub fn radar_points(values: &[f64], max: f64, cx: f64, cy: f64, radius: f64) -> Vec<(f64, f64)> {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let ratio = if max > 0.0 && v.is_finite() {
                (v / max).clamp(0.0, 1.0)
            } else {
                0.0
            };
            spoke(cx, cy, ratio * radius, i, n)
        })
        .collect()
}

/// Radar with one radius domain shared by every series.
#[allow(non_snake_case)]
#[component]
pub fn RadarChart(
    axes: Vec<String>,
    series: Vec<RadarSeries>,
    #[props(default = 200)] height: u32,
    #[props(default = 60.0)] outer_radius: f64,
) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);

    let cx = BOX_W / 2.0;
    let cy = height as f64 / 2.0;
    let n = axes.len();
    let max = nice_ceiling(
        series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max),
    );

    let rings: Vec<String> = [0.25, 0.5, 0.75, 1.0]
        .iter()
        .map(|f| {
            let pts: Vec<_> = (0..n)
                .map(|i| spoke(cx, cy, outer_radius * f, i, n))
                .collect();
            points_attr(&pts)
        })
        .collect();
    let spokes: Vec<(f64, f64)> = (0..n).map(|i| spoke(cx, cy, outer_radius, i, n)).collect();
    let axis_labels: Vec<(f64, f64, &'static str, &String)> = axes
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let (x, y) = spoke(cx, cy, outer_radius + 12.0, i, n);
            let anchor = if (x - cx).abs() < 1.0 {
                "middle"
            } else if x > cx {
                "start"
            } else {
                "end"
            };
            (x, y, anchor, label)
        })
        .collect();
    let shapes: Vec<(String, &RadarSeries)> = series
        .iter()
        .map(|s| (points_attr(&radar_points(&s.values, max, cx, cy, outer_radius)), s))
        .collect();
    let entries: Vec<LegendEntry> = series
        .iter()
        .map(|s| LegendEntry {
            name: s.name.clone(),
            color: s.color,
        })
        .collect();

    // Hovered series, one line per axis
    let tooltip: Option<Vec<String>> = hovered().and_then(|i| series.get(i)).map(|s| {
        let mut lines = vec![s.name.clone()];
        for (axis, v) in axes.iter().zip(&s.values) {
            lines.push(format!("{axis}: {}", format_number(*v)));
        }
        lines
    });

    rsx! {
        div { class: "w-full",
            svg { class: "block overflow-visible", view_box: "0 0 {BOX_W} {height}", width: "100%", height: "{height}",
                for (i, ring) in rings.iter().enumerate() {
                    polygon { key: "g{i}", points: "{ring}", fill: "none", stroke: "{BORDER}" }
                }
                for (i, (x, y)) in spokes.iter().enumerate() {
                    line { key: "s{i}", x1: "{cx}", y1: "{cy}", x2: "{x:.1}", y2: "{y:.1}", stroke: "{BORDER}" }
                }
                for (i, (x, y, anchor, label)) in axis_labels.iter().enumerate() {
                    text { key: "l{i}", x: "{x:.1}", y: "{y:.1}", fill: "{MUTED}", font_size: "9", text_anchor: "{anchor}", dominant_baseline: "central", "{label}" }
                }
                for (i, (points, s)) in shapes.iter().enumerate() {
                    polygon {
                        key: "{s.name}",
                        points: "{points}",
                        fill: "{s.color.with_alpha(s.fill_alpha)}",
                        stroke: "{s.color}",
                        stroke_width: "1.5",
                        onmouseenter: move |_| hovered.set(Some(i)),
                        onmouseleave: move |_| hovered.set(None),
                    }
                }
                if let Some(lines) = tooltip {
                    g { pointer_events: "none",
                        for (li, line) in lines.iter().enumerate() {
                            text { key: "{li}", x: "4", y: "{12.0 + li as f64 * 12.0}", fill: "{TEXT}", font_size: "10", font_weight: if li == 0 { "700" } else { "400" }, "{line}" }
                        }
                    }
                }
            }
            Legend { entries }
        }
    }
}
