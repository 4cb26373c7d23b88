use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::{use_in_view, use_reveal};
use crate::reveal::section::{markers, SectionSpec};

const CONFIRMATION_MS: u32 = 5_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please tell us your name")]
    MissingName,
    #[error("Please tell us your email")]
    MissingEmail,
    #[error("That email address doesn't look right")]
    InvalidEmail,
}

/// Checks the fields a visitor must fill in. The message is optional.
pub fn validate(name: &str, email: &str) -> Result<(), FormError> {
    if name.trim().is_empty() {
        return Err(FormError::MissingName);
    }
    let email = email.trim();
    if email.is_empty() {
        return Err(FormError::MissingEmail);
    }
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(FormError::InvalidEmail),
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub spec: Rc<SectionSpec>,
}

#[function_component]
pub fn Contact(props: &ContactProps) -> Html {
    let node = use_node_ref();
    let armed = use_in_view(node.clone(), props.spec.id.clone(), props.spec.observe);
    use_reveal(node.clone(), props.spec.clone(), armed);

    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let error = use_state(|| None::<FormError>);
    let sent = use_state(|| false);
    let confirmation_timeout = use_mut_ref(|| None::<Timeout>);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let error = error.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = validate(&name, &email) {
                error.set(Some(err));
                sent.set(false);
                return;
            }

            info!("Contact form completed locally");
            error.set(None);
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
            sent.set(true);

            let hide = sent.setter();
            *confirmation_timeout.borrow_mut() = Some(Timeout::new(CONFIRMATION_MS, move || hide.set(false)));
        })
    };

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    html! {
        <section ref={node} id={markers::CONTACT_ROOT} class="contact-section">
            <style>
                {r#"
                    .contact-section {
                        position: relative;
                        padding: 8rem 0;
                        background: #0a0f1e;
                        overflow: hidden;
                    }
                    .contact-section::before {
                        content: "";
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at top right, rgba(37, 99, 235, 0.1), #0a0f1e, black);
                        pointer-events: none;
                    }
                    .contact-container {
                        position: relative;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 4rem;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .contact-title {
                        font-size: 5rem;
                        font-weight: 700;
                        line-height: 1.1;
                        margin-bottom: 1.5rem;
                    }
                    .contact-title span {
                        background: linear-gradient(to right, white, rgba(255, 255, 255, 0.5));
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .contact-lead {
                        font-size: 1.25rem;
                        color: #94a3b8;
                        max-width: 28rem;
                    }
                    .contact-channel {
                        margin-top: 2rem;
                    }
                    .contact-channel span {
                        display: block;
                        font-family: monospace;
                        font-size: 0.875rem;
                        letter-spacing: 0.05em;
                        color: #10b981;
                        margin-bottom: 0.5rem;
                    }
                    .contact-channel a {
                        font-size: 1.875rem;
                        color: white;
                        text-decoration: none;
                        transition: color 0.3s;
                    }
                    .contact-channel a:hover {
                        color: #10b981;
                    }
                    .contact-form label {
                        display: block;
                        font-size: 0.875rem;
                        color: #94a3b8;
                        margin-left: 1rem;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        width: 100%;
                        background: transparent;
                        border: none;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 1rem;
                        font-size: 1.25rem;
                        color: white;
                        resize: none;
                        margin-bottom: 2rem;
                        transition: border-color 0.3s;
                    }
                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        outline: none;
                        border-color: #10b981;
                    }
                    .contact-submit {
                        padding: 1.5rem 3rem;
                        border: none;
                        border-radius: 9999px;
                        background: #10b981;
                        color: #0a0f1e;
                        font-size: 1.125rem;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .contact-error {
                        color: #f87171;
                        margin-bottom: 1rem;
                    }
                    .contact-sent {
                        color: #10b981;
                        margin-bottom: 1rem;
                    }
                "#}
            </style>
            <div class="contact-container">
                <div>
                    <h2 class={classes!(markers::CONTACT_REVEAL, "contact-title")}>
                        {"Let's start a "}<br /><span>{"project"}</span>
                    </h2>
                    <p class={classes!(markers::CONTACT_REVEAL, "contact-lead")}>
                        {"We help ambitious brands build the future. Get in touch and let's build something extraordinary."}
                    </p>
                    <div class={classes!(markers::CONTACT_REVEAL, "contact-channel")}>
                        <span>{"EMAIL US"}</span>
                        <a href="mailto:hello@fluxion.dev">{"hello@fluxion.dev ↗"}</a>
                    </div>
                    <div class={classes!(markers::CONTACT_REVEAL, "contact-channel")}>
                        <span>{"CALL US"}</span>
                        <a href="tel:+15551234567">{"+1 (555) 123-4567 ↗"}</a>
                    </div>
                </div>

                <form class="contact-form" {onsubmit} novalidate={true}>
                    <div class={markers::CONTACT_REVEAL}>
                        <label>{"01. What's your name?"}</label>
                        <input type="text" placeholder="John Doe *" value={(*name).clone()} oninput={on_name} />
                    </div>
                    <div class={markers::CONTACT_REVEAL}>
                        <label>{"02. What's your email?"}</label>
                        <input type="email" placeholder="john@example.com *" value={(*email).clone()} oninput={on_email} />
                    </div>
                    <div class={markers::CONTACT_REVEAL}>
                        <label>{"03. Tell us about your project"}</label>
                        <textarea rows="4" placeholder="I need a website for..." value={(*message).clone()} oninput={on_message} />
                    </div>
                    <div class={markers::CONTACT_REVEAL}>
                        if let Some(error) = &*error {
                            <p class="contact-error">{error.to_string()}</p>
                        }
                        if *sent {
                            <p class="contact-sent">{"Thanks! We'll be in touch soon."}</p>
                        }
                        <button type="submit" class="contact-submit">{"Send Message"}</button>
                    </div>
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_required() {
        assert_eq!(validate("   ", "a@b.co"), Err(FormError::MissingName));
    }

    #[test]
    fn email_is_required() {
        assert_eq!(validate("Ada", ""), Err(FormError::MissingEmail));
    }

    #[test]
    fn email_needs_both_sides_of_the_at() {
        assert_eq!(validate("Ada", "ada.example.com"), Err(FormError::InvalidEmail));
        assert_eq!(validate("Ada", "@example.com"), Err(FormError::InvalidEmail));
        assert_eq!(validate("Ada", "ada@"), Err(FormError::InvalidEmail));
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(validate(" Ada ", " ada@example.com "), Ok(()));
    }
}
