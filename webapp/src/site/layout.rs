use dioxus::prelude::*;

use common::{content::Stat, section::SectionId};

#[derive(Clone, PartialEq, Props)]
pub struct SectionProps {
    id: SectionId,
    #[props(default)]
    class: &'static str,
    children: Element,
}

// a scrollable region of the page; its DOM id is what the navigator looks for
#[component]
pub fn Section(props: SectionProps) -> Element {
    rsx! {
        section { id: props.id.as_str(), class: "page-section {props.class}", {props.children} }
    }
}

#[component]
pub fn Pill(label: &'static str) -> Element {
    rsx! {
        span { class: "pill", "{label}" }
    }
}

#[component]
pub fn StatCard(stat: Stat) -> Element {
    rsx! {
        div { class: "stat-card",
            div { class: "stat-value", "{stat.value}" }
            div { class: "stat-label", "{stat.label}" }
        }
    }
}
