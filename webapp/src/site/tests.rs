use dioxus::prelude::*;

use common::{
    config::SiteConfig,
    content::{BISHNOI, HAXXYVERSE, SiteVariant},
    section::SectionId,
};

use super::*;
use crate::{
    home::SinglePage,
    theme::{ThemeToggle, ThemedRoot, use_theme_provider},
};

// stands in for main(), which hands the config to the launcher as context
#[component]
fn Harness(variant: SiteVariant) -> Element {
    use_context_provider(|| SiteConfig {
        variant,
        ..SiteConfig::default()
    });

    rsx! {
        SinglePage {}
    }
}

// flips the theme the given number of times before the root renders
#[component]
fn ToggledRoot(toggles: usize) -> Element {
    let mut theme = use_theme_provider();
    use_hook(move || {
        for _ in 0..toggles {
            theme.toggle();
        }
    });

    rsx! {
        ThemedRoot { site_class: SiteVariant::Bishnoi.css_class(), ThemeToggle {} }
    }
}

fn render_toggled(toggles: usize) -> String {
    dioxus_ssr::render_element(rsx! {
        ToggledRoot { toggles }
    })
}

fn render_page(variant: SiteVariant) -> String {
    dioxus_ssr::render_element(rsx! {
        Harness { variant }
    })
}

fn count(html: &str, class: &str) -> usize {
    html.matches(&format!("class=\"{class}\"")).count()
}

#[test]
fn division_grid_renders_one_card_per_division() {
    let html = dioxus_ssr::render_element(rsx! {
        DivisionGrid { divisions: BISHNOI.divisions, pills: BISHNOI.division_pills }
    });

    assert_eq!(count(&html, "card division-card"), 5);
    assert_eq!(count(&html, "pill"), 5 * BISHNOI.division_pills.len());
    for division in BISHNOI.divisions {
        assert!(html.contains(division.title));
    }
}

#[test]
fn job_list_renders_one_row_per_job() {
    let html = dioxus_ssr::render_element(rsx! {
        JobList { jobs: BISHNOI.careers.jobs }
    });

    assert_eq!(count(&html, "card job-row"), 3);
}

#[test]
fn news_list_renders_one_card_per_item() {
    let html = dioxus_ssr::render_element(rsx! {
        NewsList { items: HAXXYVERSE.news, year: 2031 }
    });

    assert_eq!(count(&html, "card news-card"), HAXXYVERSE.news.len());
    assert!(html.contains("2031"));
}

#[test]
fn faq_starts_collapsed() {
    let faq = BISHNOI.roots.faqs[0];
    let html = dioxus_ssr::render_element(rsx! {
        FaqItem { faq }
    });

    assert!(html.contains(faq.question));
    assert!(!html.contains(faq.answer));
    assert!(!html.contains("faq-answer"));
    assert!(html.contains('+'));
}

#[test]
fn page_starts_in_light_mode() {
    let html = render_page(SiteVariant::Bishnoi);

    // the stylesheet mentions every class, so match on the attribute
    assert!(html.contains("class=\"site-root site-bishnoi theme-light\""));
    assert!(html.contains("Switch to dark mode"));
}

#[test]
fn toggling_switches_root_class() {
    let untouched = render_toggled(0);
    assert!(untouched.contains("class=\"site-root site-bishnoi theme-light\""));
    assert!(untouched.contains("Switch to dark mode"));

    let once = render_toggled(1);
    assert!(once.contains("class=\"site-root site-bishnoi theme-dark\""));
    assert!(once.contains("Switch to light mode"));

    let twice = render_toggled(2);
    assert!(twice.contains("class=\"site-root site-bishnoi theme-light\""));
    assert!(twice.contains("Switch to dark mode"));
}

#[test]
fn page_has_every_section_target() {
    for variant in [SiteVariant::Bishnoi, SiteVariant::Haxxyverse] {
        let html = render_page(variant);

        for id in SectionId::all() {
            assert!(
                html.contains(&format!("id=\"{id}\"")),
                "{variant} is missing section {id}"
            );
        }
    }
}

#[test]
fn page_card_counts_match_content() {
    for variant in [SiteVariant::Bishnoi, SiteVariant::Haxxyverse] {
        let site = variant.content();
        let html = render_page(variant);

        assert_eq!(count(&html, "card division-card"), site.divisions.len());
        assert_eq!(count(&html, "card job-row"), site.careers.jobs.len());
        assert_eq!(count(&html, "card news-card"), site.news.len());
        assert_eq!(count(&html, "faq"), site.roots.faqs.len());
    }
}

#[test]
fn only_second_site_has_menu_button() {
    let bishnoi = render_page(SiteVariant::Bishnoi);
    let haxxyverse = render_page(SiteVariant::Haxxyverse);

    assert_eq!(count(&bishnoi, "btn-icon menu-button"), 0);
    assert_eq!(count(&haxxyverse, "btn-icon menu-button"), 1);

    // the panel itself only exists while open
    assert_eq!(count(&haxxyverse, "menu-panel"), 0);
}
