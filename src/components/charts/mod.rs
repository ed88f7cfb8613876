//! SVG charts. Every chart draws into a fixed-width view box and scales to
//! the width of its panel.

pub mod cartesian;
pub mod donut;
pub mod radar;
pub mod scale;

use dioxus::prelude::*;

pub use cartesian::{CartesianChart, Orientation, Series};
pub use donut::{slices_from, DonutChart, Slice, SliceLabel};
pub use radar::{RadarChart, RadarSeries};

use crate::shared::theme::{palette_color, slice_color, Color};
use crate::shared::types::CategoryRecord;

pub const VIEW_W: f64 = 600.0;

/// Pulls one column out of a dataset.
pub fn column<T, V>(rows: &[T], f: impl Fn(&T) -> V) -> Vec<V> {
    rows.iter().map(f).collect()
}

pub fn labels<T>(rows: &[T], f: impl Fn(&T) -> &'static str) -> Vec<String> {
    rows.iter().map(|r| f(r).to_string()).collect()
}

/// Palette colors for `n` records, cycling past the palette's end.
pub fn palette_colors(n: usize) -> Vec<Color> {
    (0..n).map(palette_color).collect()
}

/// Explicit record color, else the palette color for its index.
pub fn record_colors(records: &[CategoryRecord]) -> Vec<Color> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| slice_color(r.color, i))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub name: String,
    pub color: Color,
}

#[allow(non_snake_case)]
#[component]
pub fn Legend(entries: Vec<LegendEntry>) -> Element {
    rsx! {
        div { class: "mt-1 flex flex-wrap justify-center gap-3 text-[10px] text-slate-500",
            for (i, entry) in entries.iter().enumerate() {
                span { key: "{i}", class: "inline-flex items-center gap-1",
                    span { class: "inline-block h-2.5 w-2.5 rounded-sm", style: "background:{entry.color}" }
                    "{entry.name}"
                }
            }
        }
    }
}
