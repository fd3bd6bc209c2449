use dioxus::prelude::*;

use common::{
    content::{Faq, RootsCard, SiteContent, TimelineEntry},
    disclosure::DisclosurePanel,
    section::SectionId,
};

use crate::{
    site::Section,
    viewport::{scroll_to_section, use_navigator},
};

#[component]
fn RootsCardView(card: RootsCard) -> Element {
    let navigator = use_navigator();
    let target = card.target;

    rsx! {
        div { class: "card card-lift roots-card",
            h3 { class: "card-title", "{card.title}" }
            p { class: "card-body", "{card.desc}" }
            button {
                class: "btn-link",
                onclick: move |_| scroll_to_section(&navigator, target),
                "{card.cta} →"
            }
        }
    }
}

#[component]
fn TimelineItem(entry: TimelineEntry) -> Element {
    rsx! {
        div { class: "timeline-item",
            div {
                div { class: "timeline-year", "{entry.year}" }
            }
            div { class: "timeline-body",
                div { class: "card-title", "{entry.title}" }
                p { class: "card-body", "{entry.text}" }
            }
        }
    }
}

// one question/answer pair with its own open flag
#[component]
pub fn FaqItem(faq: Faq) -> Element {
    let mut panel = use_signal(|| DisclosurePanel::new(faq.question, faq.answer));

    let (question, state, answer) = {
        let panel = panel.read();
        (
            panel.question().to_owned(),
            panel.state(),
            panel.visible_answer().map(str::to_owned),
        )
    };

    rsx! {
        div { class: "faq",
            button {
                class: "faq-question",
                onclick: move |_| {
                    panel.write().toggle();
                },
                span { "{question}" }
                span { class: "muted", "{state.indicator()}" }
            }
            if let Some(answer) = answer {
                div { class: "faq-answer", "{answer}" }
            }
        }
    }
}

#[component]
pub fn RootsSection(site: &'static SiteContent) -> Element {
    let roots = &site.roots;

    rsx! {
        Section { id: SectionId::Roots, class: "band",
            div { class: "container",
                h2 { class: "section-title", "{roots.heading}" }
                p { class: "roots-intro", "{roots.intro}" }

                div { class: "grid-3", style: "margin-top: 40px;",
                    for card in roots.cards.iter() {
                        RootsCardView { key: "{card.title}", card: *card }
                    }
                }

                div { id: SectionId::RootsTimeline.as_str(), class: "timeline",
                    for entry in roots.timeline.iter() {
                        TimelineItem { key: "{entry.year}", entry: *entry }
                    }
                }

                div { class: "grid-2 faq-grid",
                    for faq in roots.faqs.iter() {
                        FaqItem { key: "{faq.question}", faq: *faq }
                    }
                }
            }
        }
    }
}
