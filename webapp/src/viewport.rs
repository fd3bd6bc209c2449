use anyhow::Result;
use dioxus::prelude::*;
use tracing::error;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use common::{
    nav::{ScrollNavigator, Viewport},
    section::SectionId,
};

// DomViewport
//
// the browser side of the navigator: sections are found by DOM id and the
// window does the smooth scrolling itself, which also gives us "last call wins"
// for free
#[derive(Clone, Copy, Debug, Default)]
pub struct DomViewport;

impl DomViewport {
    fn window() -> Result<Window> {
        web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window exists"))
    }

    // Ok(None) means the page is fine but has no such section
    fn locate(id: SectionId) -> Result<Option<f64>> {
        let window = Self::window()?;

        let document = window
            .document()
            .ok_or_else(|| anyhow::Error::msg("window has no document"))?;

        let element = match document.get_element_by_id(id.as_str()) {
            Some(element) => element,
            None => return Ok(None),
        };

        let scroll_y = window
            .scroll_y()
            .map_err(|_| anyhow::Error::msg("failed to read scroll position"))?;

        Ok(Some(element.get_bounding_client_rect().top() + scroll_y))
    }
}

impl Viewport for DomViewport {
    fn section_top(&self, id: SectionId) -> Option<f64> {
        Self::locate(id).unwrap_or_else(|err| {
            error!("failed to locate section {id}: {err}");
            None
        })
    }

    fn scroll_to(&mut self, top: f64) {
        let window = match Self::window() {
            Ok(window) => window,
            Err(err) => {
                error!("failed to scroll: {err}");
                return;
            }
        };

        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);

        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn use_navigator() -> ScrollNavigator {
    use_context::<ScrollNavigator>()
}

pub fn scroll_to_section(navigator: &ScrollNavigator, id: SectionId) {
    navigator.go_to(&mut DomViewport, id);
}

// a button that scrolls to a section; the building block for the header,
// hero and footer links
#[derive(Clone, PartialEq, Props)]
pub struct SectionLinkProps {
    target: SectionId,
    #[props(default = "nav-link")]
    class: &'static str,
    children: Element,
}

#[component]
pub fn SectionLink(props: SectionLinkProps) -> Element {
    let navigator = use_navigator();
    let target = props.target;

    rsx! {
        button {
            class: "{props.class}",
            onclick: move |_| scroll_to_section(&navigator, target),
            {props.children}
        }
    }
}
