use dioxus::prelude::*;

use crate::components::charts::{
    column, labels, palette_colors, CartesianChart, Orientation, Series,
};
use crate::components::{MetricRow, Panel};
use crate::registry::{CATEGORIES, COUNTRIES, MONTHLY_REVENUE};
use crate::shared::theme::{ACCENT, BLUE, CYAN, GOLD, GREEN};
use crate::shared::types::MetricTileSpec;

#[rustfmt::skip]
static TILES: &[MetricTileSpec] = &[
    MetricTileSpec::new("Revenue", "$9.90B", ACCENT),
    MetricTileSpec::new("Profit", "$4.87B", GREEN),
    MetricTileSpec::new("Margin", "49.2%", CYAN),
    MetricTileSpec::new("Orders", "3,500", BLUE),
    MetricTileSpec::new("AOV", "$2.83M", GOLD),
];

#[allow(non_snake_case)]
#[component]
pub fn RevenueTab() -> Element {
    let monthly = vec![
        Series::bar("Revenue", column(MONTHLY_REVENUE, |m| m.revenue), ACCENT)
            .alpha(0xCC),
        Series::bar("Profit", column(MONTHLY_REVENUE, |m| m.profit), GREEN)
            .alpha(0xCC),
    ];
    let categories = vec![
        Series::bar("Revenue", column(CATEGORIES, |c| c.value), ACCENT)
            .colors(palette_colors(CATEGORIES.len())),
    ];
    let countries = vec![
        Series::bar("Revenue", column(COUNTRIES, |c| c.revenue), ACCENT)
            .colors(palette_colors(COUNTRIES.len())),
    ];

    rsx! {
        div { class: "flex flex-col gap-3.5",
            MetricRow { tiles: TILES }
            Panel { title: "Monthly Revenue & Profit ($M)",
                CartesianChart {
                    categories: labels(MONTHLY_REVENUE, |m| m.month),
                    series: monthly,
                    height: 280,
                    legend: true,
                    label_every: 3,
                }
            }
            div { class: "grid grid-cols-1 gap-3 lg:grid-cols-2",
                Panel { title: "Revenue by Category ($M)",
                    CartesianChart {
                        categories: labels(CATEGORIES, |c| c.name),
                        series: categories,
                        orientation: Orientation::Horizontal,
                        grid: false,
                        label_width: 65,
                    }
                }
                Panel { title: "Revenue by Country ($M)",
                    CartesianChart { categories: labels(COUNTRIES, |c| c.code), series: countries }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::views::{render_tab, Tab};

    #[test]
    fn monthly_axis_labels_every_third_month() {
        let html = render_tab(Tab::Revenue);
        assert!(html.contains(">Jul<"));
        // Feb'24 is the second month and is skipped on the axis
        assert!(html.contains(">Apr<"));
        assert!(!html.contains(">Feb<"));
        assert!(html.contains("$9.90B"));
    }
}
