use dioxus::prelude::*;

use crate::components::charts::{labels, slices_from, DonutChart, RadarChart, RadarSeries};
use crate::components::{MetricRow, Panel};
use crate::registry::{CUSTOMER_STATUS, SEGMENTS, SENTIMENT};
use crate::shared::theme::{ACCENT, BLUE, CYAN, GOLD, GREEN, PURPLE, RED};
use crate::shared::types::MetricTileSpec;

#[rustfmt::skip]
static TILES: &[MetricTileSpec] = &[
    MetricTileSpec::new("Golden Records", "500", PURPLE),
    MetricTileSpec::new("Active", "311", GREEN).sub("62.2%"),
    MetricTileSpec::new("At-Risk", "66", GOLD),
    MetricTileSpec::new("Churned", "53", RED),
    MetricTileSpec::new("Repeat Rate", "94.0%", CYAN),
    MetricTileSpec::new("Interactions", "6,000", BLUE).sub("51% positive"),
];

#[allow(non_snake_case)]
#[component]
pub fn Customer360Tab() -> Element {
    let segment_radar = vec![
        RadarSeries::new(
            "Revenue",
            SEGMENTS.iter().map(|s| s.revenue).collect(),
            ACCENT,
            0x4D,
        ),
        RadarSeries::new(
            "Customers",
            SEGMENTS.iter().map(|s| s.customers as f64).collect(),
            PURPLE,
            0x33,
        ),
    ];

    rsx! {
        div { class: "flex flex-col gap-3.5",
            MetricRow { tiles: TILES }
            div { class: "grid grid-cols-1 gap-3 lg:grid-cols-3",
                Panel { title: "Customer Status",
                    DonutChart { slices: slices_from(CUSTOMER_STATUS) }
                }
                Panel { title: "Sentiment",
                    DonutChart { slices: slices_from(SENTIMENT) }
                }
                Panel { title: "Revenue by Segment",
                    RadarChart { axes: labels(SEGMENTS, |s| s.name), series: segment_radar }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::views::{render_tab, Tab};

    #[test]
    fn status_and_sentiment_show_shares() {
        let html = render_tab(Tab::Customer360);
        assert!(html.contains("Active 62%"));
        assert!(html.contains("Positive 51%"));
        assert!(html.contains("Enterprise"));
    }
}
