use leptos::prelude::*;

use crate::prefs::use_prefs;

const CONTACT_EMAIL: &str = "hi@aryapradana.dev";
const CONTACT_WHATSAPP: &str = "+62 812 3456 7890";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    fn error_key(self) -> &'static str {
        match self {
            ContactField::Name => "contact.error.name",
            ContactField::Email => "contact.error.email",
            ContactField::Subject => "contact.error.subject",
            ContactField::Message => "contact.error.message",
        }
    }
}

/// A contact form submission. Validation is structural only; delivery is
/// the caller's business via the section's `on_submit` callback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Returns the fields that fail validation, in display order. An
    /// empty result means the message is ready to send.
    pub fn validate(&self) -> Vec<ContactField> {
        let mut invalid = Vec::new();
        if self.name.trim().is_empty() {
            invalid.push(ContactField::Name);
        }
        if !email_looks_valid(&self.email) {
            invalid.push(ContactField::Email);
        }
        if self.subject.trim().is_empty() {
            invalid.push(ContactField::Subject);
        }
        if self.message.trim().is_empty() {
            invalid.push(ContactField::Message);
        }
        invalid
    }
}

/// Loose structural check: one `@` with a non-empty local part and a
/// domain that contains a dot. Real verification happens on delivery.
pub(crate) fn email_looks_valid(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@')
}

/// Contact section: two direct-contact cards plus the message form.
/// When `on_submit` is absent a valid submission just clears the form.
#[component]
pub fn ContactSection(
    #[prop(optional, into)] on_submit: Option<Callback<ContactMessage>>,
) -> impl IntoView {
    let prefs = use_prefs();
    let t = move |key: &'static str| move || prefs.t(key);

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<ContactField>::new());

    let field_error = move |field: ContactField| {
        move || {
            errors
                .get()
                .contains(&field)
                .then(|| prefs.t(field.error_key()))
        }
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        let invalid = draft.validate();
        if invalid.is_empty() {
            if let Some(cb) = on_submit {
                cb.run(draft);
            }
            name.set(String::new());
            email.set(String::new());
            subject.set(String::new());
            message.set(String::new());
        }
        errors.set(invalid);
    };

    view! {
        <section id="contact" class="relative py-24 reveal-on-scroll">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto text-center mb-16">
                    <p class="text-primary text-sm font-medium tracking-wider mb-4">
                        {t("contact.section")}
                    </p>
                    <h2 class="text-4xl md:text-5xl font-bold text-foreground mb-4">
                        {t("contact.title")}
                    </h2>
                    <p class="text-foreground/60 text-lg">{t("contact.subtitle")}</p>
                </div>

                <div class="max-w-4xl mx-auto grid grid-cols-1 md:grid-cols-2 gap-6 mb-12">
                    <a
                        href=format!("mailto:{CONTACT_EMAIL}")
                        class="glass-card rounded-2xl p-8 flex flex-col gap-2 hover:glow-effect transition-all"
                    >
                        <p class="text-foreground/40 text-sm uppercase tracking-wider">
                            {t("contact.email")}
                        </p>
                        <p class="text-foreground font-medium text-lg">{CONTACT_EMAIL}</p>
                        <p class="text-primary text-sm mt-2">{t("contact.mail_me")}</p>
                    </a>
                    <a
                        href=format!(
                            "https://wa.me/{}",
                            CONTACT_WHATSAPP
                                .chars()
                                .filter(char::is_ascii_digit)
                                .collect::<String>(),
                        )
                        target="_blank"
                        rel="noopener noreferrer"
                        class="glass-card rounded-2xl p-8 flex flex-col gap-2 hover:glow-effect transition-all"
                    >
                        <p class="text-foreground/40 text-sm uppercase tracking-wider">
                            {t("contact.whatsapp")}
                        </p>
                        <p class="text-foreground font-medium text-lg">{CONTACT_WHATSAPP}</p>
                        <p class="text-primary text-sm mt-2">{t("contact.text_me")}</p>
                    </a>
                </div>

                <form
                    class="max-w-4xl mx-auto glass-card rounded-2xl p-8 flex flex-col gap-6"
                    novalidate=true
                    on:submit=submit
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <div>
                            <input
                                type="text"
                                class="contact-input"
                                placeholder=t("contact.form.name")
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                            <FieldError message=Signal::derive(field_error(ContactField::Name)) />
                        </div>
                        <div>
                            <input
                                type="email"
                                class="contact-input"
                                placeholder=t("contact.form.email")
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                            <FieldError message=Signal::derive(field_error(ContactField::Email)) />
                        </div>
                    </div>
                    <div>
                        <input
                            type="text"
                            class="contact-input"
                            placeholder=t("contact.form.subject")
                            prop:value=move || subject.get()
                            on:input=move |ev| subject.set(event_target_value(&ev))
                        />
                        <FieldError message=Signal::derive(field_error(ContactField::Subject)) />
                    </div>
                    <div>
                        <textarea
                            rows="6"
                            class="contact-input resize-none"
                            placeholder=t("contact.form.message")
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                        <FieldError message=Signal::derive(field_error(ContactField::Message)) />
                    </div>
                    <button
                        type="submit"
                        class="self-end rounded-full bg-primary text-primary-foreground font-medium px-8 py-3 hover:glow-effect transition-all"
                    >
                        {t("contact.form.send")}
                    </button>
                </form>
            </div>
        </section>
    }
}

#[component]
fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || {
            message
                .get()
                .map(|msg| view! { <p class="text-destructive text-sm mt-2">{msg}</p> })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Arya".into(),
            email: "arya@example.com".into(),
            subject: "Project inquiry".into(),
            message: "Hello there".into(),
        }
    }

    #[test]
    fn filled_message_is_valid() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn empty_message_flags_every_field() {
        assert_eq!(
            ContactMessage::default().validate(),
            vec![
                ContactField::Name,
                ContactField::Email,
                ContactField::Subject,
                ContactField::Message,
            ]
        );
    }

    #[test]
    fn whitespace_only_fields_are_invalid() {
        let draft = ContactMessage {
            name: "   ".into(),
            message: "\n\t".into(),
            ..filled()
        };
        assert_eq!(
            draft.validate(),
            vec![ContactField::Name, ContactField::Message]
        );
    }

    #[test]
    fn email_structure_is_checked() {
        for bad in ["", "plainaddress", "@no-local.com", "user@", "user@nodot", "user@.com", "user@dot.", "a@b@c.com"] {
            let draft = ContactMessage {
                email: bad.into(),
                ..filled()
            };
            assert_eq!(draft.validate(), vec![ContactField::Email], "{bad:?}");
        }
        for good in ["user@example.com", "  user@example.com  ", "a.b+c@sub.domain.org"] {
            let draft = ContactMessage {
                email: good.into(),
                ..filled()
            };
            assert!(draft.validate().is_empty(), "{good:?}");
        }
    }
}
