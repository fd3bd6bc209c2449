use dioxus::prelude::*;

use common::{content::SiteContent, section::SectionId};

use crate::site::{Pill, Section};

#[component]
pub fn AboutSection(site: &'static SiteContent) -> Element {
    let about = &site.about;

    rsx! {
        Section { id: SectionId::About,
            div { class: "container about-grid",
                div {
                    h2 { class: "section-title", "{about.heading}" }
                    p { class: "card-body", "{about.body}" }
                    div { class: "pill-row",
                        for value in about.values.iter() {
                            Pill { key: "{value}", label: *value }
                        }
                    }
                }
                div {
                    div { class: "card",
                        div { class: "card-title", "{about.leaders_heading}" }
                        ul { class: "plain-list",
                            for leader in about.leaders.iter() {
                                li { key: "{leader.name}",
                                    strong { "{leader.name}" }
                                    " — {leader.role}"
                                }
                            }
                        }
                        div { class: "muted", style: "margin-top: 16px;", "{about.leaders_note}" }
                    }
                }
            }
        }
    }
}
