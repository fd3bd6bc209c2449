use dioxus::prelude::*;

use common::{config::SiteConfig, menu::MobileMenu};

use crate::{
    site::*,
    theme::{ThemedRoot, use_theme_provider},
    ui::{current_year, style},
};

// SinglePage
//
// the root view.  it owns the theme context and the menu flag; ThemedRoot turns
// the mode into the page class
#[component]
pub fn SinglePage() -> Element {
    let config = use_context::<SiteConfig>();
    let variant = config.variant;
    let site = variant.content();

    use_context_provider(|| config.navigator());
    use_theme_provider();
    let menu = use_signal(MobileMenu::new);

    let year = current_year();

    rsx! {
        style { "{style::SITE_STYLES}" }
        ThemedRoot { site_class: variant.css_class(),
            SiteHeader { site, menu }
            if site.mobile_menu {
                MobileMenuPanel { site, menu }
            }
            HeroSection { site }
            AboutSection { site }
            RootsSection { site }
            DivisionsSection { site }
            NewsSection { site, year }
            CareersSection { site }
            ContactSection { site }
            SiteFooter { site, year }
        }
    }
}
