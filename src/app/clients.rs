use leptos::prelude::*;

use crate::content;
use crate::prefs::use_prefs;

/// Client logo grid followed by the experience statement.
#[component]
pub fn ClientsSection() -> impl IntoView {
    let prefs = use_prefs();
    let t = move |key: &'static str| move || prefs.t(key);

    let names = Memo::new(move |_| content::translate_list(prefs.language.get(), "clients.names"));

    view! {
        <section id="clients" class="relative py-20 reveal-on-scroll">
            <div class="container mx-auto px-6">
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-8 mb-16">
                    <For
                        each=move || names.get()
                        key=|name| name.clone()
                        children=move |name| {
                            view! {
                                <div class="flex items-center justify-center p-4 glass-card rounded-xl hover:glow-effect transition-all duration-300">
                                    <span class="text-foreground/60 font-medium text-sm tracking-wide">
                                        {name}
                                    </span>
                                </div>
                            }
                        }
                    />
                </div>

                <div class="max-w-4xl mx-auto text-center space-y-6">
                    <div class="text-6xl font-bold text-primary mb-4">{t("clients.years")}</div>
                    <p class="text-xl text-foreground/80 leading-relaxed">
                        {t("clients.statement")}
                    </p>
                    <p class="text-foreground/60 leading-relaxed">{t("clients.detail")}</p>
                    <div class="pt-8">
                        <p class="text-sm text-foreground/40">{t("clients.note")}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
