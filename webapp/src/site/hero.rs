use dioxus::prelude::*;

use common::{content::SiteContent, section::SectionId};

use crate::{
    site::{Section, StatCard},
    viewport::SectionLink,
};

#[component]
pub fn HeroSection(site: &'static SiteContent) -> Element {
    let hero = &site.hero;

    rsx! {
        Section { id: SectionId::Home, class: "hero",
            div { class: "container hero-grid",
                div {
                    h1 { class: "hero-title", "{hero.headline}" }
                    p { class: "hero-lead", "{hero.lead}" }
                    div { class: "hero-actions",
                        SectionLink { target: hero.primary_cta.target, class: "btn btn-primary",
                            "{hero.primary_cta.label}"
                        }
                        SectionLink {
                            target: hero.secondary_cta.target,
                            class: "btn btn-secondary",
                            "{hero.secondary_cta.label}"
                        }
                    }
                    div { class: "stats-grid",
                        for stat in site.stats.iter() {
                            StatCard { key: "{stat.label}", stat: *stat }
                        }
                    }
                }
                div {
                    div {
                        class: "hero-image",
                        style: "background-image: url('{hero.image_url}');",
                    }
                    p { class: "muted", style: "margin-top: 12px;", "{hero.caption}" }
                }
            }
        }
    }
}
