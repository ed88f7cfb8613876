use dioxus::prelude::*;

use crate::shared::theme::Color;

#[allow(non_snake_case)]
#[component]
pub fn Pill(#[props(into)] text: String, color: Color) -> Element {
    let tint = color.with_alpha(0x22);
    rsx! {
        span { class: "rounded px-2 py-0.5 text-[10px] font-semibold", style: "background:{tint};color:{color}", "{text}" }
    }
}
