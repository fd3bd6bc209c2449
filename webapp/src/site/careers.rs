use dioxus::prelude::*;

use common::{
    content::{Job, SiteContent},
    section::SectionId,
};

use crate::site::Section;

#[component]
pub fn JobList(jobs: &'static [Job]) -> Element {
    rsx! {
        div { class: "job-list",
            for (idx, job) in jobs.iter().enumerate() {
                div { key: "{idx}", class: "card job-row",
                    div { class: "card-title", "{job.role}" }
                    div { class: "muted", "{job.location}" }
                    button { class: "btn-link", "Apply →" }
                }
            }
        }
    }
}

#[component]
pub fn CareersSection(site: &'static SiteContent) -> Element {
    let careers = &site.careers;

    rsx! {
        Section { id: SectionId::Careers,
            div { class: "container about-grid",
                div {
                    h2 { class: "section-title", "Careers" }
                    p { class: "card-body", "{careers.intro}" }
                    JobList { jobs: careers.jobs }
                }
                div {
                    div { class: "perks",
                        div { class: "card-title", "{careers.perks_heading}" }
                        ul {
                            for perk in careers.perks.iter() {
                                li { key: "{perk}", "{perk}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
