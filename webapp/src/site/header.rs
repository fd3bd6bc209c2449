use dioxus::prelude::*;

use common::{content::SiteContent, menu::MobileMenu};

use crate::{site::Pill, theme::ThemeToggle, viewport::SectionLink};

#[derive(Clone, PartialEq, Props)]
pub struct SiteHeaderProps {
    site: &'static SiteContent,
    menu: Signal<MobileMenu>,
}

#[component]
pub fn SiteHeader(props: SiteHeaderProps) -> Element {
    let site = props.site;
    let mut menu = props.menu;

    rsx! {
        header { class: "site-header",
            div { class: "container header-inner",
                div { class: "wordmark-row",
                    div { class: "wordmark",
                        span { class: "wordmark-brand", "{site.brand}" }
                        span { class: "wordmark-suffix", "{site.brand_suffix}" }
                    }
                    Pill { label: site.tagline }
                }

                div { class: "header-actions",
                    nav { class: "nav-links",
                        for entry in site.nav.iter() {
                            SectionLink { key: "{entry.target}", target: entry.target, "{entry.label}" }
                        }
                    }

                    ThemeToggle {}

                    if site.mobile_menu {
                        button {
                            class: "btn-icon menu-button",
                            title: "Open menu",
                            onclick: move |_| menu.write().open(),
                            "☰"
                        }
                    }
                }
            }
        }
    }
}
