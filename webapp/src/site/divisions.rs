use dioxus::prelude::*;

use common::{
    content::{Division, SiteContent},
    section::SectionId,
};

use crate::site::{Pill, Section};

// one card per division, each carrying the same pills
#[component]
pub fn DivisionGrid(divisions: &'static [Division], pills: &'static [&'static str]) -> Element {
    rsx! {
        div { class: "grid-3",
            for division in divisions.iter() {
                div { key: "{division.id}", class: "card division-card",
                    h3 { class: "card-title", "{division.title}" }
                    p { class: "card-body", "{division.desc}" }
                    div { class: "pill-row",
                        for pill in pills.iter() {
                            Pill { key: "{pill}", label: *pill }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn DivisionsSection(site: &'static SiteContent) -> Element {
    rsx! {
        Section { id: SectionId::Divisions,
            div { class: "container",
                h2 { class: "section-title", "{site.divisions_heading}" }
                DivisionGrid { divisions: site.divisions, pills: site.division_pills }
            }
        }
    }
}
