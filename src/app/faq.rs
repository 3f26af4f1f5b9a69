use leptos::prelude::*;

use crate::content;
use crate::prefs::use_prefs;

/// FAQ accordion. Entries toggle independently, so several can be open at
/// once; all start collapsed.
#[component]
pub fn FaqSection() -> impl IntoView {
    let prefs = use_prefs();
    let t = move |key: &'static str| move || prefs.t(key);

    let faqs = Memo::new(move |_| content::faq(prefs.language.get()));

    view! {
        <section id="faq" class="relative py-24 reveal-on-scroll">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto">
                    <div class="text-center mb-16">
                        <h2 class="text-4xl font-bold text-foreground mb-4">{t("faq.title")}</h2>
                        <p class="text-foreground/60">{t("faq.subtitle")}</p>
                    </div>

                    <div class="glass-card p-8 rounded-2xl">
                        <For
                            each=move || faqs.get()
                            key=|faq| faq.question.clone()
                            children=move |faq| {
                                let open = RwSignal::new(false);
                                let answer = faq.answer.clone();
                                view! {
                                    <div class="border-b border-border/20 last:border-b-0">
                                        <button
                                            class="w-full flex items-center justify-between py-4 text-left text-foreground hover:text-primary transition-colors"
                                            on:click=move |_| open.update(|o| *o = !*o)
                                        >
                                            <span>{faq.question.clone()}</span>
                                            <span class="ml-4 text-foreground/40">
                                                {move || if open.get() { "−" } else { "+" }}
                                            </span>
                                        </button>
                                        <Show when=move || open.get()>
                                            <p class="pb-4 text-foreground/70 leading-relaxed">
                                                {answer.clone()}
                                            </p>
                                        </Show>
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
