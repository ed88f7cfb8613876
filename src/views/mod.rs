//! The eight dashboard tabs. Each view reads the registry and renders a fixed
//! layout; none holds state of its own.

mod clickstream;
mod customer360;
mod executive;
mod fraud;
mod lifecycle;
mod mdm;
mod pipeline;
mod revenue;

use dioxus::prelude::*;

pub use clickstream::ClickstreamTab;
pub use customer360::Customer360Tab;
pub use executive::ExecutiveTab;
pub use fraud::FraudTab;
pub use lifecycle::LifecycleTab;
pub use mdm::MdmTab;
pub use pipeline::PipelineTab;
pub use revenue::RevenueTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Executive,
    Revenue,
    Customer360,
    Lifecycle,
    Pipeline,
    Clickstream,
    Fraud,
    Mdm,
}

impl Tab {
    pub const ALL: [Tab; 8] = [
        Tab::Executive,
        Tab::Revenue,
        Tab::Customer360,
        Tab::Lifecycle,
        Tab::Pipeline,
        Tab::Clickstream,
        Tab::Fraud,
        Tab::Mdm,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Executive => "Executive RT",
            Tab::Revenue => "Revenue",
            Tab::Customer360 => "Customer 360",
            Tab::Lifecycle => "Lifecycle",
            Tab::Pipeline => "GTM Pipeline",
            Tab::Clickstream => "Clickstream",
            Tab::Fraud => "Fraud",
            Tab::Mdm => "MDM & DQ",
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn TabView(tab: Tab) -> Element {
    match tab {
        Tab::Executive => rsx! { ExecutiveTab {} },
        Tab::Revenue => rsx! { RevenueTab {} },
        Tab::Customer360 => rsx! { Customer360Tab {} },
        Tab::Lifecycle => rsx! { LifecycleTab {} },
        Tab::Pipeline => rsx! { PipelineTab {} },
        Tab::Clickstream => rsx! { ClickstreamTab {} },
        Tab::Fraud => rsx! { FraudTab {} },
        Tab::Mdm => rsx! { MdmTab {} },
    }
}

#[cfg(test)]
pub(crate) fn render_tab(tab: Tab) -> String {
    let mut dom = VirtualDom::new_with_props(TabView, TabViewProps { tab });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
