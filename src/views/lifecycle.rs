use dioxus::prelude::*;

use crate::components::charts::{
    column, labels, record_colors, slices_from, CartesianChart, DonutChart, Series, SliceLabel,
};
use crate::components::{MetricRow, Panel, Pill};
use crate::registry::{CHURN_TIERS, LIFECYCLE_DEFINITIONS, LIFECYCLE_STAGES};
use crate::shared::theme::{ACCENT, CYAN, GOLD, GREEN, PURPLE, RED, SLATE};
use crate::shared::types::MetricTileSpec;

#[rustfmt::skip]
static TILES: &[MetricTileSpec] = &[
    MetricTileSpec::new("Champions", "68", GREEN).sub("Tenure 24+ months"),
    MetricTileSpec::new("Dormant", "231", SLATE).sub("No activity 90+ days"),
    MetricTileSpec::new("At-Risk", "69", GOLD).sub("45-90 day gap"),
    MetricTileSpec::new("Onboarding", "70", CYAN).sub("< 3 months tenure"),
    MetricTileSpec::new("Churned", "53", RED).sub("Lost customers"),
    MetricTileSpec::new("Repeat Rate", "94.0%", PURPLE),
];

#[allow(non_snake_case)]
#[component]
pub fn LifecycleTab() -> Element {
    let stages = vec![
        Series::bar("Customers", column(LIFECYCLE_STAGES, |r| r.value), ACCENT)
            .colors(record_colors(LIFECYCLE_STAGES)),
    ];

    rsx! {
        div { class: "flex flex-col gap-3.5",
            MetricRow { tiles: TILES }
            div { class: "grid grid-cols-1 gap-3 lg:grid-cols-2",
                Panel { title: "Lifecycle Stage Distribution",
                    CartesianChart { categories: labels(LIFECYCLE_STAGES, |r| r.name), series: stages, height: 260 }
                }
                Panel { title: "Churn Risk Tiers",
                    DonutChart {
                        slices: slices_from(CHURN_TIERS),
                        height: 260,
                        inner_radius: 55.0,
                        outer_radius: 95.0,
                        label: SliceLabel::Value,
                    }
                }
            }
            Panel { title: "Lifecycle Stage Definitions & Actions",
                div { class: "grid grid-cols-1 gap-2.5 md:grid-cols-2 lg:grid-cols-3",
                    for def in LIFECYCLE_DEFINITIONS.iter() {
                        div { key: "{def.stage}", class: "rounded-lg bg-slate-100 p-3", style: "border-left:3px solid {def.color}",
                            div { class: "mb-1.5 flex items-center justify-between",
                                span { class: "text-[13px] font-bold", style: "color:{def.color}", "{def.stage}" }
                                Pill { text: def.tenure, color: def.color }
                            }
                            div { class: "mb-1 text-[10px]", "{def.description}" }
                            div { class: "text-[9px] text-slate-500", "→ {def.action}" }
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
    fn renders_stage_cards_and_churn_counts() {
        let html = render_tab(Tab::Lifecycle);
        assert!(html.contains("High: 313"));
        assert_eq!(html.matches("→ ").count(), 6);
        assert!(html.contains("Win-back emails"));
    }
}
