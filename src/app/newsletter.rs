use leptos::prelude::*;

use super::contact::email_looks_valid;
use crate::prefs::use_prefs;

/// A newsletter signup draft. The submit button stays disabled until
/// [`NewsletterSignup::ready`] holds; delivery is the caller's business
/// via the section's `on_subscribe` callback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterSignup {
    pub email: String,
    pub accepted: bool,
}

impl NewsletterSignup {
    /// A signup needs a plausible email address and an explicit privacy
    /// consent. Neither alone is enough.
    pub fn ready(&self) -> bool {
        self.accepted && email_looks_valid(&self.email)
    }
}

#[component]
pub fn NewsletterSection(
    #[prop(optional, into)] on_subscribe: Option<Callback<String>>,
) -> impl IntoView {
    let prefs = use_prefs();
    let t = move |key: &'static str| move || prefs.t(key);

    let email = RwSignal::new(String::new());
    let accepted = RwSignal::new(false);
    let ready = Memo::new(move |_| {
        NewsletterSignup {
            email: email.get(),
            accepted: accepted.get(),
        }
        .ready()
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = NewsletterSignup {
            email: email.get_untracked(),
            accepted: accepted.get_untracked(),
        };
        if draft.ready() {
            if let Some(cb) = on_subscribe {
                cb.run(draft.email);
            }
            email.set(String::new());
            accepted.set(false);
        }
    };

    view! {
        <section id="newsletter" class="relative py-12 sm:py-20 reveal-on-scroll">
            <div class="container mx-auto px-4 sm:px-6">
                <div class="max-w-2xl mx-auto">
                    <div class="glass-card p-6 sm:p-8 rounded-2xl text-center space-y-4 sm:space-y-6">
                        <h2 class="text-2xl sm:text-3xl font-bold text-foreground">
                            {t("newsletter.title")}
                        </h2>
                        <p class="text-foreground/60 text-sm sm:text-base">
                            {t("newsletter.subtitle")}
                        </p>

                        <form class="space-y-4" novalidate=true on:submit=submit>
                            <input
                                type="email"
                                class="contact-input"
                                placeholder=t("newsletter.email")
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />

                            <label class="flex items-start space-x-2 text-xs sm:text-sm text-left">
                                <input
                                    type="checkbox"
                                    class="mt-0.5"
                                    prop:checked=move || accepted.get()
                                    on:change=move |ev| accepted.set(event_target_checked(&ev))
                                />
                                <span class="text-foreground/60 leading-relaxed flex-1">
                                    {t("newsletter.consent")}
                                </span>
                            </label>

                            <button
                                type="submit"
                                class="w-full rounded-full bg-primary text-primary-foreground font-medium px-8 py-3 transition-all enabled:hover:glow-effect disabled:opacity-40"
                                disabled=move || !ready.get()
                            >
                                {t("newsletter.subscribe")}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_needs_both_email_and_consent() {
        let mut draft = NewsletterSignup::default();
        assert!(!draft.ready());

        draft.email = "reader@example.com".into();
        assert!(!draft.ready());

        draft.accepted = true;
        assert!(draft.ready());
    }

    #[test]
    fn consent_alone_is_not_enough() {
        let draft = NewsletterSignup {
            email: "not-an-address".into(),
            accepted: true,
        };
        assert!(!draft.ready());
        let draft = NewsletterSignup {
            email: String::new(),
            accepted: true,
        };
        assert!(!draft.ready());
    }
}
