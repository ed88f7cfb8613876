use dioxus::prelude::*;

use crate::components::charts::{column, labels, palette_colors, CartesianChart, Series};
use crate::components::{MetricRow, Panel};
use crate::registry::{CAMPAIGNS, FUNNEL, REFERRERS};
use crate::shared::theme::{ACCENT, BLUE, CYAN, GREEN, PURPLE};
use crate::shared::types::MetricTileSpec;

#[rustfmt::skip]
static TILES: &[MetricTileSpec] = &[
    MetricTileSpec::new("Total Events", "25,000", CYAN),
    MetricTileSpec::new("Conversions", "1,342", GREEN).sub("5.4% rate"),
    MetricTileSpec::new("Sessions", "8,000", PURPLE),
    MetricTileSpec::new("Unique Visitors", "2,000", BLUE).sub("Anonymous: 30%"),
    MetricTileSpec::new("Top Referrer", "Email", ACCENT).sub("5.53% conv rate"),
];

// Conversion rates cluster between 4.7 and 5.9 percent
const CONVERSION_DOMAIN: (f64, f64) = (4.0, 7.0);

#[allow(non_snake_case)]
#[component]
pub fn ClickstreamTab() -> Element {
    let funnel = vec![
        Series::bar("Visitors", column(FUNNEL, |s| s.visitors as f64), ACCENT)
            .colors(palette_colors(FUNNEL.len())),
    ];
    let referrers = vec![
        Series::bar("Visits", column(REFERRERS, |r| r.visits as f64), BLUE)
            .alpha(0x60),
        Series::line("Conv %", column(REFERRERS, |r| r.conversion_pct), GREEN)
            .right()
            .with_dots(),
    ];

    rsx! {
        div { class: "flex flex-col gap-3.5",
            MetricRow { tiles: TILES }
            div { class: "grid grid-cols-1 gap-3 lg:grid-cols-2",
                Panel { title: "Conversion Funnel — Page Views",
                    CartesianChart { categories: labels(FUNNEL, |s| s.step), series: funnel, height: 240 }
                }
                Panel { title: "Referrer Source — Visits & Conversion Rate",
                    CartesianChart {
                        categories: labels(REFERRERS, |r| r.source),
                        series: referrers,
                        height: 240,
                        legend: true,
                        right_domain: CONVERSION_DOMAIN,
                    }
                }
            }
            Panel { title: "Attribution Model — UTM Campaign Performance",
                div { class: "grid grid-cols-1 gap-2.5 md:grid-cols-2 lg:grid-cols-4",
                    for c in CAMPAIGNS.iter() {
                        div { key: "{c.name}", class: "rounded-lg bg-slate-100 p-3", style: "border-top:3px solid {c.color}",
                            div { class: "text-[13px] font-bold", style: "color:{c.color}", "{c.name}" }
                            div { class: "my-1 text-xl font-extrabold", "{c.conversion_pct}%" }
                            div { class: "text-[9px] text-slate-500", "Conversion Rate • {c.leads} leads" }
                        }
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
    fn campaign_cards_and_fixed_rate_axis() {
        let html = render_tab(Tab::Clickstream);
        assert!(html.contains("retarget_q1"));
        assert!(html.contains("9.1%"));
        assert!(html.contains("Conversion Rate • 155 leads"));
        assert!(html.contains("Conv %"));
    }
}
