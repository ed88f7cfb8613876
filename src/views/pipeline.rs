use dioxus::prelude::*;

use crate::components::charts::{column, labels, CartesianChart, Orientation, Series};
use crate::components::{MetricRow, Panel};
use crate::registry::{LEAD_SOURCES, LOSS_REASONS, PIPELINE, SALES_REPS};
use crate::shared::theme::{
    slice_color, Color, Semantic, ACCENT, BLUE, CYAN, GOLD, GREEN, PURPLE, RED,
};
use crate::shared::types::{MetricTileSpec, RankedEntity, SalesRep};

#[rustfmt::skip]
static TILES: &[MetricTileSpec] = &[
    MetricTileSpec::new("Total Deals", "1,200", PURPLE),
    MetricTileSpec::new("Won", "133", GREEN).sub("$69.7M"),
    MetricTileSpec::new("Lost", "90", RED).sub("$39.9M"),
    MetricTileSpec::new("Win Rate", "59.6%", ACCENT),
    MetricTileSpec::new("Open Pipeline", "$516M", CYAN).sub("977 deals"),
    MetricTileSpec::new("Avg Cycle", "92 days", GOLD),
];

const TH: &str = "border-b border-slate-200 px-2.5 py-1.5 text-[10px] text-slate-500";
const TD: &str = "border-b border-slate-200/20 px-2.5 py-1.5";

/// Bar color for a stored win rate.
pub fn win_rate_color(rate: f64) -> Color {
    let role = if rate >= 70.0 {
        Semantic::Success
    } else if rate >= 55.0 {
        Semantic::Warning
    } else {
        Semantic::Danger
    };
    role.color()
}

#[allow(non_snake_case)]
#[component]
pub fn PipelineTab() -> Element {
    let stage_colors = PIPELINE
        .iter()
        .enumerate()
        .map(|(i, s)| slice_color(s.color, i))
        .collect();
    let funnel = vec![
        Series::bar("Deals", column(PIPELINE, |s| s.deals as f64), ACCENT)
            .colors(stage_colors),
        Series::line("Value $M", column(PIPELINE, |s| s.value_musd), ACCENT)
            .right()
            .with_dots(),
    ];
    let losses = vec![Series::bar("Lost Deals", column(LOSS_REASONS, |r| r.value), RED)];
    let sources = vec![
        Series::bar("Won", column(LEAD_SOURCES, |s| s.won as f64), GREEN),
        Series::bar(
            "Total Deals",
            column(LEAD_SOURCES, |s| s.deals as f64),
            BLUE,
        )
        .alpha(0x40),
    ];

    rsx! {
        div { class: "flex flex-col gap-3.5",
            MetricRow { tiles: TILES }
            div { class: "grid grid-cols-1 gap-3 lg:grid-cols-[2fr_1fr]",
                Panel { title: "Pipeline Funnel — Deals by Stage",
                    CartesianChart { categories: labels(PIPELINE, |s| s.stage), series: funnel, height: 260, legend: true }
                }
                Panel { title: "Loss Reasons",
                    CartesianChart {
                        categories: labels(LOSS_REASONS, |r| r.name),
                        series: losses,
                        height: 260,
                        orientation: Orientation::Horizontal,
                        grid: false,
                        label_width: 80,
                    }
                }
            }
            div { class: "grid grid-cols-1 gap-3 lg:grid-cols-2",
                Panel { title: "Top Sales Reps by Win Rate",
                    RepTable { reps: SALES_REPS }
                }
                Panel { title: "Lead Source Performance",
                    CartesianChart {
                        categories: labels(LEAD_SOURCES, |s| s.source),
                        series: sources,
                        height: 230,
                        orientation: Orientation::Horizontal,
                        legend: true,
                        grid: false,
                        label_width: 100,
                    }
                }
            }
        }
    }
}

/// Reps ranked by their stored win rate. The rate column is never derived
/// from the deal counts.
#[allow(non_snake_case)]
#[component]
fn RepTable(reps: &'static [SalesRep]) -> Element {
    rsx! {
        table { class: "w-full border-collapse text-[11px]",
            thead {
                tr {
                    th { class: "{TH} text-left", "Rep" }
                    th { class: "{TH} text-left", "Deals" }
                    th { class: "{TH} text-right", "Won" }
                    th { class: "{TH} text-right", "Win Rate" }
                    th { class: "{TH} text-right", "Pipeline $M" }
                }
            }
            tbody {
                for rep in reps.iter() {
                    {
                        let rate = rep.stored_rate();
                        let bar = win_rate_color(rate);
                        rsx! {
                            tr { key: "{rep.rep}",
                                td { class: "{TD} font-bold", "{rep.rep}" }
                                td { class: "{TD} text-right", "{rep.deals}" }
                                td { class: "{TD} text-right font-bold", style: "color:{GREEN}", "{rep.won}" }
                                td { class: "{TD} text-right",
                                    div { class: "flex items-center justify-end gap-1.5",
                                        div { class: "h-[5px] w-[50px] rounded-[3px] bg-slate-200",
                                            div { class: "h-full rounded-[3px]", style: "width:{rate}%;background:{bar}" }
                                        }
                                        "{rate}%"
                                    }
                                }
                                td { class: "{TD} text-right", style: "color:{ACCENT}", "${rep.pipeline_musd}M" }
                            }
                        }
                    }
                }
            }
        }
    }
}
