use dioxus::prelude::*;

use crate::shared::theme::{slice_color, Color, MUTED, TEXT};
use crate::shared::types::CategoryRecord;
use crate::utils::format::format_number;

const BOX_W: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliceLabel {
    /// `Dormant 46%`
    #[default]
    Percent,
    /// `Dormant: 231`
    Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub name: String,
    pub value: f64,
    pub color: Color,
}

impl Slice {
    pub fn new(name: &str, value: f64, color: Color) -> Self {
        Self {
            name: name.to_string(),
            value,
            color,
        }
    }
}

/// Slices for a category dataset, colored explicitly or by palette index.
pub fn slices_from(records: &[CategoryRecord]) -> Vec<Slice> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| Slice::new(r.name, r.value, slice_color(r.color, i)))
        .collect()
}

/// `value / total * 100`, rounded to the nearest integer. Zero total gives 0.
pub fn slice_percent(value: f64, total: f64) -> u32 {
    if total <= 0.0 || !total.is_finite() || !value.is_finite() {
        return 0;
    }
    (value / total * 100.0).round().max(0.0) as u32
}

pub fn slice_labels(slices: &[Slice], mode: SliceLabel) -> Vec<String> {
    let total: f64 = slices.iter().map(|s| s.value).sum();
    slices
        .iter()
        .map(|s| match mode {
            SliceLabel::Percent => format!("{} {}%", s.name, slice_percent(s.value, total)),
            SliceLabel::Value => format!("{}: {}", s.name, format_number(s.value)),
        })
        .collect()
}

fn polar(cx: f64, cy: f64, r: f64, deg: f64) -> (f64, f64) {
    let rad = deg.to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// Closed ring segment between two angles (degrees, clockwise from 12 o'clock).
fn ring_segment(cx: f64, cy: f64, inner: f64, outer: f64, a0: f64, a1: f64) -> String {
    // A full circle has coincident endpoints and would draw nothing
    let a1 = a0 + (a1 - a0).min(359.99);
    let (s0, s1) = (a0 - 90.0, a1 - 90.0);
    let (ox0, oy0) = polar(cx, cy, outer, s0);
    let (ox1, oy1) = polar(cx, cy, outer, s1);
    let (ix1, iy1) = polar(cx, cy, inner, s1);
    let (ix0, iy0) = polar(cx, cy, inner, s0);
    let large_arc = if a1 - a0 >= 180.0 { 1 } else { 0 };
    format!(
        "M {ox0:.3} {oy0:.3} A {outer:.3} {outer:.3} 0 {large_arc} 1 {ox1:.3} {oy1:.3} \
         L {ix1:.3} {iy1:.3} A {inner:.3} {inner:.3} 0 {large_arc} 0 {ix0:.3} {iy0:.3} Z"
    )
}

/// Start and end angle of every slice, in degrees.
pub fn slice_angles(slices: &[Slice]) -> Vec<(f64, f64)> {
    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    let mut start = 0.0;
    slices
        .iter()
        .map(|s| {
            let sweep = if total > 0.0 {
                s.value.max(0.0) / total * 360.0
            } else {
                0.0
            };
            let span = (start, start + sweep);
            start += sweep;
            span
        })
        .collect()
}

/// Donut (or pie, with `inner_radius` 0) with outside labels.
#[allow(non_snake_case)]
#[component]
pub fn DonutChart(
    slices: Vec<Slice>,
    #[props(default = 200)] height: u32,
    #[props(default = 45.0)] inner_radius: f64,
    #[props(default = 75.0)] outer_radius: f64,
    #[props(default)] label: SliceLabel,
) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);

    let cx = BOX_W / 2.0;
    let cy = height as f64 / 2.0;
    let view_box = format!("0 0 {BOX_W} {height}");
    let angles = slice_angles(&slices);
    let labels = slice_labels(&slices, label);

    let segments: Vec<(String, Color, (f64, f64, &'static str), String)> = slices
        .iter()
        .zip(angles.iter())
        .zip(labels.into_iter())
        .map(|((s, (a0, a1)), text)| {
            let d = ring_segment(cx, cy, inner_radius, outer_radius, *a0, *a1);
            let (lx, ly) = polar(cx, cy, outer_radius + 18.0, (a0 + a1) / 2.0 - 90.0);
            let anchor = if lx > cx { "start" } else { "end" };
            (d, s.color, (lx, ly, anchor), text)
        })
        .collect();

    let center = hovered()
        .and_then(|i| slices.get(i))
        .map(|s| (s.name.clone(), format_number(s.value)));

    rsx! {
        div { class: "w-full",
            svg { class: "block overflow-visible", view_box: "{view_box}", width: "100%", height: "{height}",
                for (i, (d, color, (lx, ly, anchor), text)) in segments.iter().enumerate() {
                    g { key: "{i}",
                        path {
                            d: "{d}", fill: "{color}", stroke: "#FFFFFF", stroke_width: "1",
                            onmouseenter: move |_| hovered.set(Some(i)),
                            onmouseleave: move |_| hovered.set(None),
                            ontouchstart: move |_| hovered.set(Some(i)),
                            ontouchend: move |_| hovered.set(None),
                        }
                        text { x: "{lx:.1}", y: "{ly:.1}", fill: "{MUTED}", font_size: "9", font_weight: "600", text_anchor: "{anchor}", dominant_baseline: "central", "{text}" }
                    }
                }
                // Tooltip in the hole
                if let Some((name, value)) = center {
                    text { x: "{cx}", y: "{cy - 6.0}", fill: "{MUTED}", font_size: "10", text_anchor: "middle", "{name}" }
                    text { x: "{cx}", y: "{cy + 10.0}", fill: "{TEXT}", font_size: "13", font_weight: "700", text_anchor: "middle", "{value}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{
        CHURN_TIERS, CUSTOMER_STATUS, FRAUD_SEVERITY, FRAUD_STATUS, LIFECYCLE_STAGES,
        MDM_MATCH_TIERS, SEGMENTS, SENTIMENT,
    };
    use crate::shared::theme::palette_color;
    use proptest::prelude::*;

    fn percent_sum(slices: &[Slice]) -> u32 {
        let total: f64 = slices.iter().map(|s| s.value).sum();
        slices.iter().map(|s| slice_percent(s.value, total)).sum()
    }

    fn segment_slices() -> Vec<Slice> {
        SEGMENTS
            .iter()
            .enumerate()
            .map(|(i, s)| Slice::new(s.name, s.revenue, palette_color(i)))
            .collect()
    }

    #[test]
    fn dormant_is_46_percent() {
        let slices = slices_from(LIFECYCLE_STAGES);
        let total: f64 = slices.iter().map(|s| s.value).sum();
        assert_eq!(total, 500.0);
        assert_eq!(slice_percent(231.0, total), 46);
        assert_eq!(slice_labels(&slices, SliceLabel::Percent)[0], "Dormant 46%");
    }

    #[test]
    fn value_labels_show_counts() {
        let labels = slice_labels(&slices_from(CHURN_TIERS), SliceLabel::Value);
        assert_eq!(labels, vec!["High: 313", "Low: 130", "Medium: 57"]);
    }

    #[test]
    fn every_donut_dataset_sums_to_about_100() {
        let datasets = [
            slices_from(LIFECYCLE_STAGES),
            slices_from(CHURN_TIERS),
            slices_from(CUSTOMER_STATUS),
            slices_from(SENTIMENT),
            slices_from(FRAUD_SEVERITY),
            slices_from(FRAUD_STATUS),
            slices_from(MDM_MATCH_TIERS),
            segment_slices(),
        ];
        for slices in datasets.iter() {
            let sum = percent_sum(slices);
            let name = &slices[0].name;
            assert!((99..=101).contains(&sum), "{name:?} sums to {sum}");
        }
    }

    #[test]
    fn zero_total_does_not_divide() {
        assert_eq!(slice_percent(5.0, 0.0), 0);
        let angles = slice_angles(&[Slice::new("a", 0.0, palette_color(0))]);
        assert_eq!(angles, vec![(0.0, 0.0)]);
    }

    #[test]
    fn angles_cover_the_circle_in_order() {
        let angles = slice_angles(&slices_from(MDM_MATCH_TIERS));
        assert_eq!(angles[0].0, 0.0);
        assert!((angles[2].1 - 360.0).abs() < 1e-9);
        for pair in angles.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn single_slice_still_draws() {
        let d = ring_segment(100.0, 100.0, 40.0, 70.0, 0.0, 360.0);
        assert!(d.starts_with("M 100.000 30.000"));
        assert!(d.contains(" 0 1 1 "));
        assert!(d.ends_with('Z'));
    }

    proptest! {
        // Each rounded share is within 0.5 of its exact share
        #[test]
        fn rounding_error_is_bounded(values in prop::collection::vec(1u32..10_000, 1..12)) {
            let slices: Vec<Slice> = values
                .iter()
                .enumerate()
                .map(|(i, v)| Slice::new("s", *v as f64, palette_color(i)))
                .collect();
            let sum = percent_sum(&slices) as f64;
            let bound = slices.len() as f64 / 2.0;
            prop_assert!((sum - 100.0).abs() <= bound);
        }

        #[test]
        fn two_slices_sum_within_one(a in 1u32..100_000, b in 1u32..100_000) {
            let slices = vec![
                Slice::new("a", a as f64, palette_color(0)),
                Slice::new("b", b as f64, palette_color(1)),
            ];
            let sum = percent_sum(&slices);
            prop_assert!((99..=101).contains(&sum));
        }
    }
}
