use dioxus::prelude::*;

use common::theme::{ModeIndicator, ThemeController, ThemeMode};

// RootThemeMarker
//
// the mode signal read by the root view when it picks its class.  this is the
// only place the page subscribes to the theme; nothing touches the document
// element directly
#[derive(Clone, Copy, PartialEq)]
pub struct RootThemeMarker(Signal<ThemeMode>);

impl ModeIndicator for RootThemeMarker {
    fn apply(&mut self, mode: ThemeMode) {
        // the controller applies the initial mode while the root is still
        // rendering, so avoid a redundant write
        if *self.0.peek() != mode {
            self.0.set(mode);
        }
    }
}

// ThemeContext
//
// provided once by the root view and consumed by anything that needs to read
// or flip the mode
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeContext {
    controller: Signal<ThemeController<RootThemeMarker>>,
    mode: Signal<ThemeMode>,
}

impl ThemeContext {
    pub fn mode(&self) -> ThemeMode {
        *self.mode.read()
    }

    pub fn toggle(&mut self) {
        self.controller.write().toggle();
    }
}

pub fn use_theme_provider() -> ThemeContext {
    let mode = use_signal(ThemeMode::default);
    let controller = use_signal(|| ThemeController::new(RootThemeMarker(mode)));

    use_context_provider(|| ThemeContext { controller, mode })
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

// the page root; the one component that subscribes to the mode to pick its class
#[component]
pub fn ThemedRoot(site_class: &'static str, children: Element) -> Element {
    let mode = use_theme().mode();

    rsx! {
        div { class: "site-root {site_class} {mode.css_class()}", {children} }
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let mode = theme.mode();

    rsx! {
        button {
            class: "btn-icon theme-toggle",
            title: mode.toggle_title(),
            onclick: move |_| theme.toggle(),
            if mode.is_dark() {
                span { class: "icon-sun", "☀" }
            } else {
                span { class: "icon-moon", "☾" }
            }
        }
    }
}
