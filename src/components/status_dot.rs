use dioxus::prelude::*;

use crate::shared::theme::Color;

#[allow(non_snake_case)]
#[component]
pub fn StatusDot(color: Color, #[props(default)] pulse: bool) -> Element {
    rsx! {
        span {
            class: "mr-1.5 inline-block h-2 w-2 rounded-full",
            class: if pulse { "animate-pulse" },
            style: "background:{color}",
        }
    }
}
