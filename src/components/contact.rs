use log::info;
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 250;
pub const THANK_YOU: &str = "Thank you for reaching out. We will come back to you shortly.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your e-mail address.")]
    MissingEmail,
    #[error("Please enter a valid e-mail address.")]
    InvalidEmail,
}

/// What the visitor has typed so far.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn with(&self, field: ContactField, value: &str) -> Self {
        let mut next = self.clone();
        match field {
            ContactField::Name => next.name = value.chars().take(NAME_MAX_CHARS).collect(),
            ContactField::Email => next.email = value.chars().take(EMAIL_MAX_CHARS).collect(),
            ContactField::Message => next.message = value.to_string(),
        }
        next
    }

    /// Nothing is sent anywhere; a valid draft just earns the thank-you note.
    pub fn submit(&self) -> Result<&'static str, ContactError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        let valid = match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
            None => false,
        };
        if !valid {
            return Err(ContactError::InvalidEmail);
        }
        Ok(THANK_YOU)
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(ContactDraft::default);
    let status = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);

    let on_input = |field: ContactField| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                ContactField::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            draft.set(draft.with(field, &value));
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let status = status.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.submit() {
                Ok(message) => {
                    info!("Contact form submitted");
                    status.set(Some(message.to_string()));
                    error.set(None);
                    draft.set(ContactDraft::default());
                }
                Err(e) => {
                    status.set(None);
                    error.set(Some(e.to_string()));
                }
            }
        })
    };

    html! {
        <form class="contact-form" onsubmit={on_submit}>
            <div class="contact-row">
                <label class="contact-label">
                    {"Name/Company"}
                    <input
                        type="text"
                        class="contact-input"
                        value={draft.name.clone()}
                        oninput={on_input(ContactField::Name)}
                        maxlength={NAME_MAX_CHARS.to_string()}
                        placeholder=" "
                    />
                </label>
            </div>
            <label class="contact-label">
                {"E-mail"}
                <input
                    type="email"
                    class="contact-input"
                    value={draft.email.clone()}
                    oninput={on_input(ContactField::Email)}
                    required=true
                    maxlength={EMAIL_MAX_CHARS.to_string()}
                    placeholder=" "
                />
            </label>
            <label class="contact-label">
                {"Write a message"}
                <textarea
                    class="contact-textarea"
                    value={draft.message.clone()}
                    oninput={on_input(ContactField::Message)}
                    placeholder=" "
                    rows="4"
                />
            </label>
            <div class="form-actions">
                <button type="submit" class="contact-button">{"Send"}</button>
                {
                    if let Some(message) = (*status).clone() {
                        html! { <p class="form-status" role="status" aria-live="polite">{message}</p> }
                    } else if let Some(message) = (*error).clone() {
                        html! { <p class="form-error" role="alert">{message}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <style>
                {r#"
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                    width: 100%;
                }

                .contact-label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                    color: #ffffff;
                    font-size: 0.95rem;
                }

                .contact-input,
                .contact-textarea {
                    padding: 0.75rem 0.9rem;
                    border: 1px solid rgba(255, 255, 255, 0.6);
                    background: rgba(255, 255, 255, 0.12);
                    color: #ffffff;
                    font: inherit;
                    border-radius: 4px;
                }

                .contact-input:focus,
                .contact-textarea:focus {
                    outline: none;
                    border-color: #ffffff;
                    background: rgba(255, 255, 255, 0.2);
                }

                .form-actions {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    flex-wrap: wrap;
                }

                .contact-button {
                    padding: 0.75rem 2.5rem;
                    background: #2f7d4f;
                    color: #ffffff;
                    border: none;
                    border-radius: 4px;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .contact-button:hover {
                    background: #25643f;
                }

                .form-status {
                    color: #d8f5e3;
                    margin: 0;
                }

                .form-error {
                    color: #ffd2d2;
                    margin: 0;
                }
                "#}
            </style>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_fields() {
        let long = "x".repeat(400);
        let draft = ContactDraft::default()
            .with(ContactField::Name, &long)
            .with(ContactField::Email, &long)
            .with(ContactField::Message, &long);

        assert_eq!(draft.name.chars().count(), NAME_MAX_CHARS);
        assert_eq!(draft.email.chars().count(), EMAIL_MAX_CHARS);
        assert_eq!(draft.message.len(), 400);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let name = "ż".repeat(150);
        let draft = ContactDraft::default().with(ContactField::Name, &name);
        assert_eq!(draft.name, "ż".repeat(NAME_MAX_CHARS));
    }

    #[test]
    fn requires_an_email() {
        let draft = ContactDraft::default().with(ContactField::Name, "Acme");
        assert_eq!(draft.submit(), Err(ContactError::MissingEmail));

        let draft = draft.with(ContactField::Email, "   ");
        assert_eq!(draft.submit(), Err(ContactError::MissingEmail));
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["piotr", "@vmpartners.pl", "piotr@", "a@b@c"] {
            let draft = ContactDraft::default().with(ContactField::Email, email);
            assert_eq!(draft.submit(), Err(ContactError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn valid_draft_gets_thank_you() {
        let draft = ContactDraft::default()
            .with(ContactField::Email, "office@vmpartners.pl")
            .with(ContactField::Message, "Hello");
        assert_eq!(draft.submit(), Ok(THANK_YOU));
    }
}
