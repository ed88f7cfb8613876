use dioxus::prelude::*;

use super::scale::{column_rects, line_points, points_attr, row_rects, Axis, Plot};
use super::{Legend, LegendEntry, VIEW_W};
use crate::shared::theme::{Color, BORDER, MUTED, TEXT};
use crate::utils::format::{format_number, format_tick};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Bar,
    Line,
    Area,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YAxis {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    /// Bars grow rightward from a category axis on the left. Line and area
    /// series are not drawn in this orientation.
    Horizontal,
}

/// One field of the records, drawn as bars, a line or a filled area.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub kind: SeriesKind,
    pub axis: YAxis,
    pub values: Vec<f64>,
    pub color: Color,
    /// Per-record fills; falls back to `color`.
    pub point_colors: Option<Vec<Color>>,
    /// Fill alpha, 0-255.
    pub alpha: u8,
    pub dots: bool,
}

impl Series {
    fn new(kind: SeriesKind, name: &str, values: Vec<f64>, color: Color) -> Self {
        Self {
            name: name.to_string(),
            kind,
            axis: YAxis::Left,
            values,
            color,
            point_colors: None,
            alpha: 0xFF,
            dots: false,
        }
    }

    pub fn bar(name: &str, values: Vec<f64>, color: Color) -> Self {
        Self::new(SeriesKind::Bar, name, values, color)
    }

    pub fn line(name: &str, values: Vec<f64>, color: Color) -> Self {
        Self::new(SeriesKind::Line, name, values, color)
    }

    pub fn area(name: &str, values: Vec<f64>, color: Color) -> Self {
        Self::new(SeriesKind::Area, name, values, color)
    }

    pub fn colors(mut self, colors: Vec<Color>) -> Self {
        self.point_colors = Some(colors);
        self
    }

    pub fn right(mut self) -> Self {
        self.axis = YAxis::Right;
        self
    }

    pub fn alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_dots(mut self) -> Self {
        self.dots = true;
        self
    }

    pub fn color_at(&self, index: usize) -> Color {
        self.point_colors
            .as_ref()
            .and_then(|c| c.get(index).copied())
            .unwrap_or(self.color)
    }

    fn fill(&self, index: usize) -> String {
        let c = self.color_at(index);
        if self.alpha == 0xFF {
            c.to_string()
        } else {
            c.with_alpha(self.alpha)
        }
    }
}

const TICKS: usize = 4;
const CHAR_W: f64 = 6.0;

/// Bar, line, area and composed charts over a shared category axis.
#[allow(non_snake_case)]
#[component]
pub fn CartesianChart(
    categories: Vec<String>,
    series: Vec<Series>,
    #[props(default = 220)] height: u32,
    #[props(default)] orientation: Orientation,
    #[props(default)] legend: bool,
    #[props(default = true)] grid: bool,
    // fixed right-hand domain; fitted to the data otherwise
    right_domain: Option<(f64, f64)>,
    // category label gutter in horizontal layout
    #[props(default = 70)] label_width: u32,
    // draw every n-th category label
    #[props(default = 1)] label_every: usize,
) -> Element {
    // Hovered category index (for tooltip)
    let mut hovered = use_signal(|| Option::<usize>::None);

    let h = height as f64;
    let horizontal = orientation == Orientation::Horizontal;
    let has_right = !horizontal && series.iter().any(|s| s.axis == YAxis::Right);

    let plot = if horizontal {
        let left = label_width as f64;
        Plot {
            left,
            top: 6.0,
            width: VIEW_W - left - 16.0,
            height: h - 6.0 - 20.0,
        }
    } else {
        let right_pad = if has_right { 40.0 } else { 12.0 };
        Plot {
            left: 44.0,
            top: 10.0,
            width: VIEW_W - 44.0 - right_pad,
            height: h - 10.0 - 22.0,
        }
    };

    let left_axis = Axis::fit(
        series
            .iter()
            .filter(|s| s.axis == YAxis::Left || horizontal)
            .flat_map(|s| s.values.iter().copied()),
    );
    let right_axis = match right_domain {
        Some((lo, hi)) => Axis::domain(lo, hi),
        None => Axis::fit(
            series
                .iter()
                .filter(|s| s.axis == YAxis::Right)
                .flat_map(|s| s.values.iter().copied()),
        ),
    };
    let axis_for = |s: &Series| {
        if s.axis == YAxis::Right && !horizontal {
            right_axis
        } else {
            left_axis
        }
    };

    let bar_series: Vec<&Series> = series
        .iter()
        .filter(|s| s.kind == SeriesKind::Bar)
        .collect();
    let slots = bar_series.len();
    let n = categories.len().max(1);
    let view_box = format!("0 0 {VIEW_W} {h}");

    // Bars
    let bars: Vec<(String, Vec<(f64, f64, f64, f64, String)>)> = bar_series
        .iter()
        .enumerate()
        .map(|(slot, s)| {
            let rects = if horizontal {
                row_rects(plot, axis_for(s), &s.values, slot, slots)
            } else {
                column_rects(plot, axis_for(s), &s.values, slot, slots)
            };
            let cells = rects
                .iter()
                .enumerate()
                .map(|(i, r)| (r.x, r.y, r.w, r.h, s.fill(i)))
                .collect();
            (s.name.clone(), cells)
        })
        .collect();

    // Lines and areas
    let traces: Vec<(Series, Vec<(f64, f64)>)> = if horizontal {
        Vec::new()
    } else {
        series
            .iter()
            .filter(|s| s.kind != SeriesKind::Bar)
            .map(|s| (s.clone(), line_points(plot, axis_for(s), &s.values)))
            .collect()
    };

    let ticks = left_axis.ticks(TICKS);
    let right_ticks = right_axis.ticks(TICKS);

    let legend_entries: Vec<LegendEntry> = series
        .iter()
        .map(|s| LegendEntry {
            name: s.name.clone(),
            color: s.color,
        })
        .collect();

    let tooltip = hovered().and_then(|i| {
        let label = categories.get(i)?.clone();
        let mut lines = vec![label];
        for s in series.iter() {
            if horizontal && s.kind != SeriesKind::Bar {
                continue;
            }
            if let Some(v) = s.values.get(i) {
                lines.push(format!("{}: {}", s.name, format_number(*v)));
            }
        }
        let anchor = if horizontal {
            let band = plot.height / n as f64;
            (plot.left + plot.width / 2.0, plot.top + (i as f64 + 0.5) * band)
        } else {
            let band = plot.width / n as f64;
            (plot.left + (i as f64 + 0.5) * band, plot.top + plot.height / 3.0)
        };
        Some((anchor, lines))
    });

    rsx! {
        div { class: "w-full",
            svg { class: "block overflow-visible", view_box: "{view_box}", width: "100%", height: "{height}",
                // Grid and value axes
                if horizontal {
                    for (i, t) in ticks.iter().enumerate() {
                        {
                            let x = plot.left + left_axis.ratio(*t) * plot.width;
                            rsx! {
                                g { key: "t{i}",
                                    if grid {
                                        line { x1: "{x:.1}", y1: "{plot.top}", x2: "{x:.1}", y2: "{plot.bottom()}", stroke: "{BORDER}", stroke_dasharray: "3 3" }
                                    }
                                    text { x: "{x:.1}", y: "{plot.bottom() + 14.0}", fill: "{MUTED}", font_size: "9", text_anchor: "middle", "{format_tick(*t)}" }
                                }
                            }
                        }
                    }
                } else {
                    for (i, t) in ticks.iter().enumerate() {
                        {
                            let y = plot.bottom() - left_axis.ratio(*t) * plot.height;
                            rsx! {
                                g { key: "t{i}",
                                    if grid {
                                        line { x1: "{plot.left}", y1: "{y:.1}", x2: "{plot.right()}", y2: "{y:.1}", stroke: "{BORDER}", stroke_dasharray: "3 3" }
                                    }
                                    text { x: "{plot.left - 4.0}", y: "{y:.1}", fill: "{MUTED}", font_size: "9", text_anchor: "end", dominant_baseline: "central", "{format_tick(*t)}" }
                                }
                            }
                        }
                    }
                    if has_right {
                        for (i, t) in right_ticks.iter().enumerate() {
                            {
                                let y = plot.bottom() - right_axis.ratio(*t) * plot.height;
                                rsx! {
                                    text { key: "r{i}", x: "{plot.right() + 4.0}", y: "{y:.1}", fill: "{MUTED}", font_size: "9", dominant_baseline: "central", "{format_tick(*t)}" }
                                }
                            }
                        }
                    }
                }

                // Category labels
                for (i, label) in categories.iter().enumerate() {
                    if i % label_every.max(1) == 0 {
                        {
                            let band = if horizontal { plot.height / n as f64 } else { plot.width / n as f64 };
                            let center = (i as f64 + 0.5) * band;
                            if horizontal {
                                rsx! {
                                    text { key: "c{i}", x: "{plot.left - 6.0}", y: "{plot.top + center:.1}", fill: "{MUTED}", font_size: "9", text_anchor: "end", dominant_baseline: "central", "{label}" }
                                }
                            } else {
                                rsx! {
                                    text { key: "c{i}", x: "{plot.left + center:.1}", y: "{plot.bottom() + 14.0}", fill: "{MUTED}", font_size: "9", text_anchor: "middle", "{label}" }
                                }
                            }
                        }
                    }
                }

                // Areas under lines
                for (s, pts) in traces.iter().filter(|(s, _)| s.kind == SeriesKind::Area) {
                    {
                        let mut outline = pts.clone();
                        if let (Some(first), Some(last)) = (pts.first(), pts.last()) {
                            outline.push((last.0, plot.bottom()));
                            outline.push((first.0, plot.bottom()));
                        }
                        let fill = s.color.with_alpha(0x30);
                        rsx! {
                            polygon { key: "a{s.name}", points: "{points_attr(&outline)}", fill: "{fill}", stroke: "none" }
                        }
                    }
                }

                // Bars
                for (name, cells) in bars.iter() {
                    g { key: "b{name}",
                        for (i, (x, y, w, bh, fill)) in cells.iter().enumerate() {
                            rect { key: "{i}", x: "{x:.1}", y: "{y:.1}", width: "{w:.1}", height: "{bh:.1}", fill: "{fill}", rx: "3" }
                        }
                    }
                }

                // Line strokes
                for (s, pts) in traces.iter() {
                    g { key: "l{s.name}",
                        polyline { points: "{points_attr(pts)}", fill: "none", stroke: "{s.color}", stroke_width: if s.kind == SeriesKind::Area { "2" } else { "1.5" } }
                        if s.dots {
                            for (i, (x, y)) in pts.iter().enumerate() {
                                circle { key: "{i}", cx: "{x:.1}", cy: "{y:.1}", r: "3", fill: "{s.color}" }
                            }
                        }
                    }
                }

                // Hover targets, one band per category
                for i in 0..categories.len() {
                    {
                        let (x, y, w, bh) = if horizontal {
                            let band = plot.height / n as f64;
                            (plot.left, plot.top + i as f64 * band, plot.width, band)
                        } else {
                            let band = plot.width / n as f64;
                            (plot.left + i as f64 * band, plot.top, band, plot.height)
                        };
                        rsx! {
                            rect {
                                key: "h{i}", x: "{x:.1}", y: "{y:.1}", width: "{w:.1}", height: "{bh:.1}", fill: "transparent",
                                onmouseenter: move |_| hovered.set(Some(i)),
                                onmouseleave: move |_| hovered.set(None),
                                ontouchstart: move |_| hovered.set(Some(i)),
                                ontouchend: move |_| hovered.set(None),
                            }
                        }
                    }
                }

                if let Some(((ax, ay), lines)) = tooltip {
                    {
                        let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as f64;
                        let tip_w = (longest * CHAR_W + 16.0).min(VIEW_W - 8.0);
                        let tip_h = lines.len() as f64 * 14.0 + 8.0;
                        let tip_x = (ax + 8.0).min(VIEW_W - tip_w - 4.0).max(4.0);
                        let tip_y = (ay - tip_h / 2.0).clamp(2.0, (h - tip_h - 2.0).max(2.0));
                        rsx! {
                            g { key: "tooltip", pointer_events: "none",
                                rect { x: "{tip_x:.1}", y: "{tip_y:.1}", width: "{tip_w:.1}", height: "{tip_h:.1}", rx: "6", fill: "#FFFFFF", stroke: "{BORDER}", stroke_width: "1" }
                                for (li, line) in lines.iter().enumerate() {
                                    text { key: "{li}", x: "{tip_x + 8.0:.1}", y: "{tip_y + 16.0 + li as f64 * 14.0:.1}", fill: "{TEXT}", font_size: "11", font_weight: if li == 0 { "700" } else { "400" }, "{line}" }
                                }
                            }
                        }
                    }
                }
            }
            if legend {
                Legend { entries: legend_entries }
            }
        }
    }
}
