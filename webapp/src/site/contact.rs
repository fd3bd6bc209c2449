use dioxus::prelude::*;

use common::{content::SiteContent, section::SectionId};

use crate::site::Section;

// the form is presentational only: nothing is validated, stored or sent
#[component]
pub fn ContactSection(site: &'static SiteContent) -> Element {
    let contact = &site.contact;

    rsx! {
        Section { id: SectionId::Contact, class: "band",
            div { class: "container",
                h2 { class: "section-title", "Contact Us" }
                div { class: "about-grid",
                    div { class: "card contact-form",
                        div { class: "form-group",
                            label { class: "form-label", "Full Name" }
                            input { class: "form-input", placeholder: "Your name" }
                        }
                        div { class: "form-row form-group",
                            div {
                                label { class: "form-label", "Email" }
                                input {
                                    class: "form-input",
                                    r#type: "email",
                                    placeholder: "you@company.com",
                                }
                            }
                            div {
                                label { class: "form-label", "Phone" }
                                input { class: "form-input", placeholder: "+91-" }
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", "Message" }
                            textarea {
                                class: "form-textarea",
                                rows: "4",
                                placeholder: "How can we help?",
                            }
                        }
                        button { class: "btn btn-primary", "Send Inquiry" }
                    }
                    div {
                        div { class: "card",
                            div { class: "card-title", "Offices" }
                            ul { class: "plain-list",
                                for office in contact.offices.iter() {
                                    li { key: "{office.region}",
                                        strong { "{office.region}" }
                                        " — {office.city}"
                                    }
                                }
                            }
                            div { class: "muted", style: "margin-top: 16px;", "{contact.partnership_note}" }
                        }
                    }
                }
            }
        }
    }
}
