use dioxus::prelude::*;

use crate::components::charts::{
    column, labels, palette_colors, record_colors, slices_from, CartesianChart, DonutChart,
    Orientation, Series, Slice, SliceLabel,
};
use crate::components::{MetricRow, Panel};
use crate::registry::{FRAUD_SEVERITY, LIFECYCLE_STAGES, PIPELINE, REALTIME_HOURLY, SEGMENTS};
use crate::shared::theme::{slice_color, ACCENT, BLUE, CYAN, GOLD, GREEN, PURPLE, RED, TEAL};
use crate::shared::types::MetricTileSpec;

#[rustfmt::skip]
static TILES: &[MetricTileSpec] = &[
    MetricTileSpec::new("Active Users Now", "834", CYAN).sub("Peak: 902 at 17:00").trend(12.0),
    MetricTileSpec::new("Revenue Today", "$8.2M", ACCENT).sub("3 deals closed").trend(5.0),
    MetricTileSpec::new("Pipeline Value", "$516M", PURPLE).sub("977 open deals"),
    MetricTileSpec::new("New Leads Today", "47", GREEN).sub("Product-Led: 22").trend(18.0),
    MetricTileSpec::new("API Latency", "180ms", BLUE).sub("P99: 420ms"),
    MetricTileSpec::new("Fraud Alerts", "48 open", RED).sub("11 critical"),
    MetricTileSpec::new("DQ Pass Rate", "97.5%", TEAL).sub("All layers"),
];

#[allow(non_snake_case)]
#[component]
pub fn ExecutiveTab() -> Element {
    let hours = labels(REALTIME_HOURLY, |h| h.hour);
    let traffic = vec![
        Series::area(
            "Active Users",
            column(REALTIME_HOURLY, |h| h.users as f64),
            CYAN,
        ),
        Series::line(
            "Latency (ms)",
            column(REALTIME_HOURLY, |h| h.latency_ms as f64),
            GOLD,
        )
        .right(),
    ];

    let segments: Vec<Slice> = SEGMENTS
        .iter()
        .zip(palette_colors(SEGMENTS.len()))
        .map(|(s, color)| Slice::new(s.name, s.revenue, color))
        .collect();

    let stage_colors = PIPELINE
        .iter()
        .enumerate()
        .map(|(i, s)| slice_color(s.color, i))
        .collect();
    let funnel = vec![
        Series::bar("Deals", column(PIPELINE, |s| s.deals as f64), ACCENT)
            .colors(stage_colors),
    ];

    let lifecycle = vec![
        Series::bar("Customers", column(LIFECYCLE_STAGES, |r| r.value), ACCENT)
            .colors(record_colors(LIFECYCLE_STAGES)),
    ];

    rsx! {
        div { class: "flex flex-col gap-3.5",
            MetricRow { tiles: TILES }
            div { class: "grid grid-cols-1 gap-3 lg:grid-cols-[2fr_1fr]",
                Panel { title: "Real-Time Traffic — Today (Hourly)",
                    CartesianChart { categories: hours, series: traffic, height: 240 }
                }
                Panel { title: "Revenue by Segment ($M)",
                    DonutChart { slices: segments, height: 240, inner_radius: 50.0, outer_radius: 85.0 }
                }
            }
            div { class: "grid grid-cols-1 gap-3 lg:grid-cols-3",
                Panel { title: "Pipeline Funnel",
                    CartesianChart {
                        categories: labels(PIPELINE, |s| s.stage),
                        series: funnel,
                        height: 200,
                        orientation: Orientation::Horizontal,
                        grid: false,
                        label_width: 65,
                    }
                }
                Panel { title: "Fraud by Severity",
                    DonutChart {
                        slices: slices_from(FRAUD_SEVERITY),
                        height: 200,
                        inner_radius: 40.0,
                        outer_radius: 70.0,
                        label: SliceLabel::Value,
                    }
                }
                Panel { title: "Lifecycle Stage Distribution",
                    CartesianChart {
                        categories: labels(LIFECYCLE_STAGES, |r| r.name),
                        series: lifecycle,
                        height: 200,
                        grid: false,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::views::{render_tab, Tab};

    #[test]
    fn shows_live_kpis_and_segment_shares() {
        let html = render_tab(Tab::Executive);
        assert!(html.contains("Active Users Now"));
        assert!(html.contains("▲ 12%"));
        assert!(html.contains("Mid-Market 28%"));
        assert!(html.contains("Critical: 11"));
    }
}
