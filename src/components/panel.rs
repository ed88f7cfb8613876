use dioxus::prelude::*;

/// Titled card. `span` is the number of grid columns it covers.
#[allow(non_snake_case)]
#[component]
pub fn Panel(
    #[props(into)] title: String,
    #[props(default = 1)] span: u32,
    height: Option<u32>,
    children: Element,
) -> Element {
    let min_height = match height {
        Some(h) => format!("{h}px"),
        None => "auto".to_string(),
    };
    rsx! {
        section {
            class: "flex flex-col rounded-[10px] border border-slate-200 bg-white px-4 py-3.5 shadow-sm",
            style: "grid-column:span {span};min-height:{min_height}",
            h3 { class: "mb-2.5 text-xs font-bold tracking-[0.3px]", "{title}" }
            div { class: "min-h-0 flex-1", {children} }
        }
    }
}
