use dioxus::prelude::*;

use common::{content::SiteContent, menu::MobileMenu};

use crate::viewport::{DomViewport, use_navigator};

// off-canvas navigation for narrow screens
//
// renders nothing while closed.  picking an entry closes the panel before the
// page scrolls
#[derive(Clone, PartialEq, Props)]
pub struct MobileMenuPanelProps {
    site: &'static SiteContent,
    menu: Signal<MobileMenu>,
}

#[component]
pub fn MobileMenuPanel(props: MobileMenuPanelProps) -> Element {
    let site = props.site;
    let mut menu = props.menu;
    let navigator = use_navigator();

    if !menu.read().is_open() {
        return rsx! {};
    }

    rsx! {
        div { class: "menu-backdrop", onclick: move |_| menu.write().close() }
        nav { class: "menu-panel",
            button {
                class: "btn-icon menu-close",
                title: "Close menu",
                onclick: move |_| menu.write().close(),
                "✕"
            }
            for entry in site.nav.iter() {
                button {
                    key: "{entry.target}",
                    class: "nav-link",
                    onclick: {
                        let target = entry.target;
                        move |_| menu.write().select(&navigator, &mut DomViewport, target)
                    },
                    "{entry.label}"
                }
            }
        }
    }
}
