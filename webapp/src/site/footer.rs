use dioxus::prelude::*;

use common::content::SiteContent;

use crate::viewport::SectionLink;

#[component]
pub fn SiteFooter(site: &'static SiteContent, year: i32) -> Element {
    let footer = &site.footer;

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-grid",
                    div {
                        div { class: "wordmark",
                            "{site.brand} "
                            span { class: "wordmark-suffix", "{site.brand_suffix}" }
                        }
                        p { class: "card-body", style: "margin-top: 8px;", "{footer.blurb}" }
                    }
                    div {
                        div { class: "card-title", "Explore" }
                        ul { class: "plain-list",
                            for entry in footer.explore.iter() {
                                li { key: "{entry.target}",
                                    SectionLink { target: entry.target, class: "footer-link",
                                        "{entry.label}"
                                    }
                                }
                            }
                        }
                    }
                    div {
                        div { class: "card-title", "Legal" }
                        ul { class: "plain-list",
                            for item in footer.legal.iter() {
                                li { key: "{item}", "{item}" }
                            }
                        }
                    }
                    div {
                        div { class: "card-title", "Contact" }
                        ul { class: "plain-list",
                            for email in footer.emails.iter() {
                                li { key: "{email}", "{email}" }
                            }
                        }
                    }
                }
                div { class: "footer-bottom muted",
                    div { "© {year} {site.name}. All rights reserved." }
                    div {
                        span { class: "dot dot-1" }
                        span { class: "dot dot-2" }
                        span { class: "dot dot-3" }
                    }
                }
            }
        }
    }
}
