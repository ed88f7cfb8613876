use dioxus::prelude::*;

use crate::components::charts::{
    column, labels, palette_colors, slices_from, CartesianChart, DonutChart, Orientation, Series,
    SliceLabel,
};
use crate::components::{MetricRow, Panel};
use crate::registry::{MDM_MATCH_TIERS, SOURCE_LINKAGE, STAR_SCHEMA};
use crate::shared::theme::{ACCENT, BLUE, CYAN, GOLD, GREEN, PURPLE, TEAL};
use crate::shared::types::MetricTileSpec;
use crate::utils::format::format_number;

#[rustfmt::skip]
static TILES: &[MetricTileSpec] = &[
    MetricTileSpec::new("Match Pairs", "200", PURPLE),
    MetricTileSpec::new("Auto-Merged", "117", GREEN).sub("58.5%"),
    MetricTileSpec::new("Review Queue", "53", GOLD),
    MetricTileSpec::new("Multi-Source", "94", CYAN).sub("3-system linked"),
    MetricTileSpec::new("DQ Pass Rate", "97.5%", TEAL),
    MetricTileSpec::new("Tables", "11", BLUE).sub("36,650 rows total"),
];

#[allow(non_snake_case)]
#[component]
pub fn MdmTab() -> Element {
    let linkage = vec![
        Series::bar("Customers", column(SOURCE_LINKAGE, |r| r.value), ACCENT)
            .colors(palette_colors(SOURCE_LINKAGE.len())),
    ];
    let schema_title = format!("Expanded Star Schema — {} Tables", STAR_SCHEMA.len());

    rsx! {
        div { class: "flex flex-col gap-3.5",
            MetricRow { tiles: TILES }
            div { class: "grid grid-cols-1 gap-3 lg:grid-cols-2",
                Panel { title: "MDM Match Tier Distribution",
                    DonutChart {
                        slices: slices_from(MDM_MATCH_TIERS),
                        height: 240,
                        inner_radius: 55.0,
                        outer_radius: 90.0,
                        label: SliceLabel::Value,
                    }
                }
                Panel { title: "Source System Linkage",
                    CartesianChart {
                        categories: labels(SOURCE_LINKAGE, |r| r.name),
                        series: linkage,
                        height: 240,
                        orientation: Orientation::Horizontal,
                        grid: false,
                        label_width: 110,
                    }
                }
            }
            Panel { title: schema_title,
                div { class: "grid grid-cols-1 gap-2.5 md:grid-cols-2 lg:grid-cols-4",
                    for table in STAR_SCHEMA.iter() {
                        div { key: "{table.name}", class: "rounded-md bg-slate-100 p-2.5 text-[10px]", style: "border-top:3px solid {table.color}",
                            div { class: "mb-0.5 text-[11px] font-bold", style: "color:{table.color}", "{table.name}" }
                            div { class: "mb-1.5 text-[9px] text-slate-500", "{table.kind} • {format_number(table.rows as f64)} rows" }
                            for field in table.fields.iter() {
                                div { key: "{field}", class: "border-b border-slate-200/20 py-px font-mono text-[9px]", "{field}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
