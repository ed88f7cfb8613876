use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::clock::use_wall_clock;
use crate::components::StatusDot;
use crate::registry::audit;
use crate::shared::theme::Semantic;
use crate::views::{Tab, TabView};
use crate::TAILWIND_CSS;

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    // Shell state; children only ever see copies
    let active = use_signal(Tab::default);
    let now = use_wall_clock();

    use_hook(audit::log_findings_once);

    rsx! {
        document::Title { "Enterprise MDM Lakehouse" }
        document::Stylesheet { href: TAILWIND_CSS }
        document::Meta { name: "theme-color", content: "#FFFFFF" }
        document::Meta { name: "color-scheme", content: "light" }
        div { class: "min-h-screen bg-slate-50 font-sans text-slate-800",
            Header { now: now() }
            TabStrip {
                active: active(),
                on_select: move |tab: Tab| {
                    select_tab(active, tab);
                },
            }
            main { class: "mx-auto max-w-[1440px] p-4",
                TabView { tab: active() }
            }
        }
    }
}

/// Moves the shell to `tab`. Selecting the current tab changes nothing.
fn select_tab(mut active: Signal<Tab>, tab: Tab) -> bool {
    if tab == *active.peek() {
        return false;
    }
    info!("[shell] tab -> {}", tab.label());
    active.set(tab);
    true
}

#[allow(non_snake_case)]
#[component]
fn Header(now: String) -> Element {
    rsx! {
        header { class: "flex items-center justify-between border-b border-slate-200 bg-white px-5 py-2.5",
            div { class: "flex items-center gap-3",
                div { class: "flex h-8 w-8 items-center justify-center rounded-lg bg-gradient-to-br from-[#FF9900] to-[#8B5CF6] text-sm font-extrabold text-white",
                    "S"
                }
                div {
                    h1 { class: "text-sm font-extrabold", "Enterprise MDM Lakehouse — Full Analytics" }
                    div { class: "text-[10px] text-slate-500", "11 Tables • 36,650 Records • S3 + Delta + Snowflake" }
                }
            }
            div { class: "text-right",
                div { class: "text-[10px]", style: "color:{Semantic::Muted.color()}",
                    StatusDot { color: Semantic::Success.color(), pulse: true }
                    "LIVE — {now}"
                }
                div { class: "text-[9px] text-slate-400", "Uptime: 99.95% | DQ: 97.5% pass" }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn TabStrip(active: Tab, on_select: EventHandler<Tab>) -> Element {
    let accent = Semantic::Accent.color();
    let muted = Semantic::Muted.color();
    rsx! {
        nav { class: "flex overflow-x-auto border-b border-slate-200 bg-white px-3", role: "tablist",
            for tab in Tab::ALL {
                button {
                    key: "{tab.index()}",
                    role: "tab",
                    aria_selected: if tab == active { "true" } else { "false" },
                    class: "cursor-pointer whitespace-nowrap border-0 border-b-2 border-solid bg-transparent px-3.5 py-2 text-[11px]",
                    class: if tab == active { "font-bold" } else { "border-transparent font-medium" },
                    style: if tab == active { "color:{accent};border-bottom-color:{accent}" } else { "color:{muted}" },
                    onclick: move |_| on_select.call(tab),
                    "{tab.label()}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(non_snake_case)]
    #[component]
    fn StripHarness(active: Tab) -> Element {
        rsx! {
            TabStrip { active, on_select: move |_: Tab| {} }
        }
    }

    /// Starts on `start`, asks the shell transition for `pick`, then renders.
    #[allow(non_snake_case)]
    #[component]
    fn SelectHarness(start: Tab, pick: Tab) -> Element {
        let active = use_signal(|| start);
        let changed = use_hook(|| select_tab(active, pick));
        rsx! {
            TabStrip { active: active(), on_select: move |tab: Tab| {
                select_tab(active, tab);
            } }
            span { "changed={changed}" }
        }
    }

    fn render<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> String {
        let mut dom = VirtualDom::new_with_props(root, props);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn selected_label(html: &str) -> &str {
        let at = html.find("aria-selected=\"true\"").expect("a selected tab");
        let rest = &html[at..];
        let open = rest.find('>').expect("button body") + 1;
        let close = rest.find("</button>").expect("button end");
        &rest[open..close]
    }

    #[test]
    fn strip_lists_all_tabs_and_marks_one() {
        for tab in Tab::ALL {
            let html = render(StripHarness, StripHarnessProps { active: tab });
            assert_eq!(html.matches("role=\"tab\"").count(), 8);
            assert_eq!(html.matches("aria-selected=\"true\"").count(), 1);
            assert_eq!(selected_label(&html), tab.label().replace('&', "&amp;"));
            assert!(html.contains("GTM Pipeline"));
        }
    }

    #[test]
    fn selecting_another_tab_moves_the_shell() {
        let html = render(
            SelectHarness,
            SelectHarnessProps {
                start: Tab::Executive,
                pick: Tab::Pipeline,
            },
        );
        assert_eq!(selected_label(&html), "GTM Pipeline");
        assert!(html.contains("changed=true"));
    }

    #[test]
    fn selecting_the_current_tab_is_a_no_op() {
        let html = render(
            SelectHarness,
            SelectHarnessProps {
                start: Tab::Fraud,
                pick: Tab::Fraud,
            },
        );
        assert_eq!(selected_label(&html), "Fraud");
        assert!(html.contains("changed=false"));
    }

    #[test]
    fn header_shows_clock_text() {
        let html = render(
            Header,
            HeaderProps {
                now: "5:04:59 PM".to_string(),
            },
        );
        assert!(html.contains("LIVE — 5:04:59 PM"));
        assert!(html.contains("Uptime: 99.95% | DQ: 97.5% pass"));
        assert!(html.contains("animate-pulse"));
    }

    #[test]
    fn app_starts_on_executive_tab() {
        let mut dom = VirtualDom::new(App);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert_eq!(selected_label(&html), "Executive RT");
        assert!(html.contains("Active Users Now"));
        assert!(!html.contains("Golden Records"));
    }

    #[test]
    fn remounting_the_shell_does_not_relog_the_audit() {
        for _ in 0..3 {
            let mut dom = VirtualDom::new(App);
            dom.rebuild_in_place();
        }
        assert!(!audit::log_findings_once());
    }
}
