use dioxus::prelude::*;

use crate::components::charts::{
    column, labels, palette_colors, slices_from, CartesianChart, DonutChart, Orientation, Series,
    SliceLabel,
};
use crate::components::{MetricRow, Panel, Pill};
use crate::registry::{
    CRITICAL_ALERTS, DETECTION_METHODS, FRAUD_SEVERITY, FRAUD_STATUS, FRAUD_TYPES,
};
use crate::shared::theme::{ACCENT, CRIMSON, GOLD, PURPLE, RED, SLATE};
use crate::shared::types::MetricTileSpec;

#[rustfmt::skip]
static TILES: &[MetricTileSpec] = &[
    MetricTileSpec::new("Total Alerts", "450", RED),
    MetricTileSpec::new("Critical", "11", CRIMSON),
    MetricTileSpec::new("Confirmed Fraud", "56", RED).sub("$609K impact"),
    MetricTileSpec::new("False Positive", "134", SLATE).sub("29.8% FP rate"),
    MetricTileSpec::new("Investigating", "86", GOLD),
    MetricTileSpec::new("AI Detected", "89", PURPLE).sub("Claude AI Analysis"),
];

#[allow(non_snake_case)]
#[component]
pub fn FraudTab() -> Element {
    let methods = vec![
        Series::bar("Alerts", column(DETECTION_METHODS, |r| r.value), ACCENT)
            .colors(palette_colors(DETECTION_METHODS.len())),
    ];
    let types = vec![
        Series::bar("Alerts", column(FRAUD_TYPES, |r| r.value), ACCENT)
            .colors(palette_colors(FRAUD_TYPES.len())),
    ];

    rsx! {
        div { class: "flex flex-col gap-3.5",
            MetricRow { tiles: TILES }
            div { class: "grid grid-cols-1 gap-3 lg:grid-cols-3",
                Panel { title: "Severity Distribution",
                    DonutChart {
                        slices: slices_from(FRAUD_SEVERITY),
                        height: 220,
                        outer_radius: 80.0,
                        label: SliceLabel::Value,
                    }
                }
                Panel { title: "Alert Status",
                    DonutChart {
                        slices: slices_from(FRAUD_STATUS),
                        height: 220,
                        outer_radius: 80.0,
                        label: SliceLabel::Value,
                    }
                }
                Panel { title: "Detection Methods",
                    CartesianChart {
                        categories: labels(DETECTION_METHODS, |r| r.name),
                        series: methods,
                        orientation: Orientation::Horizontal,
                        grid: false,
                        label_width: 85,
                    }
                }
            }
            div { class: "grid grid-cols-1 gap-3 lg:grid-cols-[2fr_1fr]",
                Panel { title: "Fraud Types — Alert Distribution",
                    CartesianChart { categories: labels(FRAUD_TYPES, |r| r.name), series: types }
                }
                Panel { title: "Active Critical Alerts",
                    div { class: "flex flex-col gap-2",
                        for alert in CRITICAL_ALERTS.iter() {
                            div { key: "{alert.id}", class: "rounded-md bg-slate-100 p-2.5", style: "border-left:3px solid {RED}",
                                div { class: "mb-1.5 flex items-center justify-between",
                                    span { class: "font-bold", "{alert.id}" }
                                    Pill { text: "Risk: {alert.risk}", color: RED }
                                }
                                div { class: "text-[9px] text-slate-500", "{alert.fraud_type} • {alert.amount} • {alert.system}" }
                            }
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
    fn lists_critical_alerts_with_risk() {
        let html = render_tab(Tab::Fraud);
        assert!(html.contains("FRD-00234"));
        assert!(html.contains("Risk: 95"));
        assert!(html.contains("Amount Spike • $1.2M • Oracle"));
        assert!(html.contains("False Positive: 134"));
    }
}
