//! Contact section - contact details and the simulated message form.

use dioxus::prelude::*;
use folio_core::{ContactField, ContactForm, PersonalInfo, Presentation, Section};

use super::{Button, FormField, PageSection, TrackedNode};

#[component]
pub fn Contact(
    personal: PersonalInfo,
    /// `tel:` href for the phone number
    phone_href: String,
    #[props(default)] form: ContactForm,
    #[props(default)] presentation: Presentation,
    #[props(default)] on_input: Option<EventHandler<(ContactField, String)>>,
    #[props(default)] on_submit: Option<EventHandler<()>>,
    #[props(default)] on_mount: Option<EventHandler<TrackedNode>>,
) -> Element {
    let disabled = form.is_disabled();

    rsx! {
        PageSection {
            section: Section::Contact,
            badge: "Contact".to_string(),
            title: "Let's Work Together".to_string(),
            revealed: presentation.is_revealed(Section::Contact),
            on_mount: on_mount,
            div { class: "contact-content",
                div { class: "contact-info",
                    p { class: "contact-description",
                        "I'm always open to discussing new opportunities, interesting projects, or just having a chat about technology."
                    }
                    div { class: "contact-details",
                        ContactItem { icon: "envelope", heading: "Email",
                            a { href: "mailto:{personal.email}", "{personal.email}" }
                        }
                        ContactItem { icon: "phone", heading: "Phone",
                            a { href: "{phone_href}", "{personal.phone}" }
                        }
                        ContactItem { icon: "map-marker-alt", heading: "Location",
                            span { "{personal.location}" }
                        }
                    }
                }
                form {
                    class: "contact-form",
                    id: "contactForm",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        if let Some(handler) = on_submit {
                            handler.call(());
                        }
                    },
                    div { class: "form-row",
                        FormField {
                            field: ContactField::Name,
                            value: form.value(ContactField::Name).to_string(),
                            disabled: disabled,
                            oninput: on_input,
                        }
                        FormField {
                            field: ContactField::Email,
                            value: form.value(ContactField::Email).to_string(),
                            disabled: disabled,
                            oninput: on_input,
                        }
                    }
                    FormField {
                        field: ContactField::Subject,
                        value: form.value(ContactField::Subject).to_string(),
                        disabled: disabled,
                        oninput: on_input,
                    }
                    FormField {
                        field: ContactField::Message,
                        value: form.value(ContactField::Message).to_string(),
                        disabled: disabled,
                        oninput: on_input,
                    }
                    Button { button_type: "submit".to_string(), disabled: disabled,
                        span { "{form.button_label()}" }
                        i { class: "fas fa-{form.button_icon()}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactItem(icon: &'static str, heading: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "contact-item",
            div { class: "contact-icon",
                i { class: "fas fa-{icon}" }
            }
            div {
                h4 { "{heading}" }
                {children}
            }
        }
    }
}
