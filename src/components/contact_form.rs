//! Contact Form
//!
//! Name/email/message form posting once to the contact endpoint. The
//! submit button is disabled for the duration of the request; the outcome
//! banner clears itself after five seconds. Failed submissions are not
//! retried automatically.

use dioxus::prelude::*;
use portfolio_core::contact::STATUS_VISIBLE;
use portfolio_core::{ContactMessage, FormStatus, StatusBanner};

/// Form relay endpoint, formspree-style.
const CONTACT_ENDPOINT: &str = "https://formspree.io/f/portfolio-contact";

/// Show an outcome and schedule its timed clear. The banner's generation
/// guard makes a clear scheduled for an older outcome a no-op.
fn show_status(mut banner: Signal<StatusBanner>, outcome: FormStatus) {
    let generation = banner.write().show(outcome);
    spawn(async move {
        tokio::time::sleep(STATUS_VISIBLE).await;
        banner.write().clear_if_current(generation);
    });
}

#[component]
pub fn ContactForm() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let banner = use_signal(StatusBanner::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if sending() {
            return;
        }

        let msg = ContactMessage {
            name: name(),
            email: email(),
            message: message(),
        };
        if let Err(e) = msg.validate() {
            tracing::warn!("contact form rejected: {}", e);
            show_status(banner, FormStatus::Error);
            return;
        }

        sending.set(true);
        spawn(async move {
            let result = reqwest::Client::new()
                .post(CONTACT_ENDPOINT)
                .header(reqwest::header::ACCEPT, "application/json")
                .form(&msg)
                .send()
                .await;

            let outcome = match result {
                Ok(response) if response.status().is_success() => {
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    FormStatus::Success
                }
                Ok(response) => {
                    tracing::error!(status = %response.status(), "contact submission failed");
                    FormStatus::Error
                }
                Err(e) => {
                    tracing::error!("contact submission failed: {}", e);
                    FormStatus::Error
                }
            };
            sending.set(false);
            show_status(banner, outcome);
        });
    };

    rsx! {
        form { class: "contact-form", onsubmit: submit,
            input {
                class: "form-field",
                r#type: "text",
                placeholder: "Your name",
                value: "{name}",
                oninput: move |e| name.set(e.value()),
            }
            input {
                class: "form-field",
                r#type: "email",
                placeholder: "Your email",
                value: "{email}",
                oninput: move |e| email.set(e.value()),
            }
            textarea {
                class: "form-field",
                rows: "6",
                placeholder: "Your message",
                value: "{message}",
                oninput: move |e| message.set(e.value()),
            }

            button {
                r#type: "submit",
                class: "btn-submit",
                disabled: sending(),
                if sending() { "Sending..." } else { "Send Message" }
            }

            if let Some(outcome) = banner.read().current() {
                p { class: "{outcome.css_class()}", "{outcome.message()}" }
            }
        }
    }
}
