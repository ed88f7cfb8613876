use dioxus::prelude::*;

use crate::shared::theme::{Color, Semantic, ACCENT};
use crate::shared::types::MetricTileSpec;

/// Arrow glyph and color for a trend delta: up and green when positive.
pub fn trend_arrow(trend: f64) -> (&'static str, Color) {
    if trend > 0.0 {
        ("▲", Semantic::Success.color())
    } else {
        ("▼", Semantic::Danger.color())
    }
}

#[allow(non_snake_case)]
#[component]
pub fn MetricTile(
    #[props(into)] label: String,
    #[props(into)] value: String,
    #[props(!optional)] sub: Option<String>,
    #[props(!optional)] trend: Option<f64>,
    #[props(default = ACCENT)] color: Color,
) -> Element {
    rsx! {
        article { class: "relative min-w-[130px] flex-1 overflow-hidden rounded-[10px] border border-slate-200 bg-white px-4 py-3.5 shadow-sm",
            div { class: "absolute left-0 top-0 h-[2.5px] w-full", style: "background:{color}" }
            div { class: "mb-0.5 text-[10px] font-semibold uppercase tracking-[0.5px] text-slate-500", "{label}" }
            div { class: "text-2xl font-extrabold", style: "color:{color}", "{value}" }
            if let Some(sub) = sub {
                p { class: "mt-0.5 text-[10px] text-slate-400", "{sub}" }
            }
            if let Some(t) = trend {
                {
                    let (arrow, tint) = trend_arrow(t);
                    let magnitude = t.abs();
                    rsx! {
                        span { class: "text-[10px] font-semibold", style: "color:{tint}", "{arrow} {magnitude}%" }
                    }
                }
            }
        }
    }
}

/// A wrapping row of tiles built from static specs.
#[allow(non_snake_case)]
#[component]
pub fn MetricRow(tiles: &'static [MetricTileSpec]) -> Element {
    rsx! {
        div { class: "flex flex-wrap gap-2.5",
            for (i, tile) in tiles.iter().enumerate() {
                MetricTile {
                    key: "{i}",
                    label: tile.label,
                    value: tile.value,
                    sub: tile.sub.map(String::from),
                    trend: tile.trend,
                    color: tile.color,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::theme::{CYAN, GREEN, RED};

    fn render_tile(props: MetricTileProps) -> String {
        let mut dom = VirtualDom::new_with_props(MetricTile, props);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn arrows_follow_sign() {
        assert_eq!(trend_arrow(12.0), ("▲", GREEN));
        assert_eq!(trend_arrow(-3.0), ("▼", RED));
        assert_eq!(trend_arrow(0.0).0, "▼");
    }

    #[test]
    fn tile_renders_trend_and_sub() {
        let html = render_tile(MetricTileProps {
            label: "Active Users Now".to_string(),
            value: "834".to_string(),
            sub: Some("Peak: 902 at 17:00".to_string()),
            trend: Some(12.0),
            color: CYAN,
        });
        assert!(html.contains("Active Users Now"));
        assert!(html.contains("834"));
        assert!(html.contains("Peak: 902 at 17:00"));
        assert!(html.contains("▲ 12%"));
        assert!(html.contains("color:#06B6D4"));
    }

    #[test]
    fn negative_trend_shows_magnitude() {
        let html = render_tile(MetricTileProps {
            label: "Churn".to_string(),
            value: "53".to_string(),
            sub: None,
            trend: Some(-4.5),
            color: RED,
        });
        assert!(html.contains("▼ 4.5%"));
        assert!(!html.contains("<p"));
    }

    #[test]
    fn plain_tile_has_no_trend() {
        let html = render_tile(MetricTileProps {
            label: "Tables".to_string(),
            value: "11".to_string(),
            sub: None,
            trend: None,
            color: ACCENT,
        });
        assert!(!html.contains("<span"));
    }
}
