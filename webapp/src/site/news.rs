use dioxus::prelude::*;

use common::{
    content::{NewsItem, SiteContent},
    section::SectionId,
};

use crate::{site::Section, viewport::SectionLink};

#[component]
pub fn NewsList(items: &'static [NewsItem], year: i32) -> Element {
    rsx! {
        div { class: "grid-3",
            for (idx, item) in items.iter().enumerate() {
                div { key: "{idx}", class: "card news-card",
                    div { class: "muted", "{item.kind} • {year}" }
                    div { class: "card-title", style: "margin-top: 8px;", "{item.headline}" }
                    p { class: "card-body", "{item.summary}" }
                    // placeholder, there is no article page behind it
                    button { class: "btn-link", "Read more →" }
                }
            }
        }
    }
}

#[component]
pub fn NewsSection(site: &'static SiteContent, year: i32) -> Element {
    rsx! {
        Section { id: SectionId::News, class: "band",
            div { class: "container",
                div { class: "section-header",
                    h2 { class: "section-title", "{site.news_heading}" }
                    SectionLink { target: SectionId::Contact, class: "btn btn-primary btn-sm",
                        "Submit Press Query"
                    }
                }
                NewsList { items: site.news, year }
            }
        }
    }
}
