use leptos::prelude::*;

use crate::content;
use crate::prefs::use_prefs;

/// Experience timeline. Each entry expands independently; everything
/// starts collapsed.
#[component]
pub fn ExperienceSection() -> impl IntoView {
    let prefs = use_prefs();
    let t = move |key: &'static str| move || prefs.t(key);

    let entries = Memo::new(move |_| content::experience(prefs.language.get()));

    view! {
        <section id="experience" class="relative py-24 reveal-on-scroll">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto mb-16">
                    <div class="flex items-center gap-4 mb-6">
                        <span class="text-sm text-primary font-medium tracking-wider">
                            {t("experience.section")}
                        </span>
                        <div class="h-px bg-border flex-1"></div>
                    </div>
                    <h2 class="text-4xl md:text-5xl font-bold text-foreground mb-6 leading-tight">
                        {t("experience.title")}
                    </h2>
                    <p class="text-lg text-foreground/70 leading-relaxed max-w-3xl">
                        {t("experience.description")}
                    </p>
                </div>

                <div class="max-w-4xl mx-auto space-y-2">
                    <For
                        each=move || entries.get()
                        key=|entry| (entry.company.clone(), entry.period.clone())
                        children=move |entry| {
                            let open = RwSignal::new(false);
                            let summary = entry.summary.clone();
                            view! {
                                <div class="border-b border-border/30 last:border-b-0 rounded-lg hover:bg-card/20 transition-colors">
                                    <button
                                        class="w-full flex flex-col md:flex-row md:items-center justify-between py-6 px-4 text-left"
                                        on:click=move |_| open.update(|o| *o = !*o)
                                    >
                                        <div class="flex-1">
                                            <h3 class="text-xl md:text-2xl font-semibold text-foreground mb-2">
                                                {entry.title.clone()}
                                            </h3>
                                            <p class="text-foreground/60 text-sm md:text-base">
                                                {format!("{} — {}", entry.company, entry.location)}
                                            </p>
                                        </div>
                                        <div class="mt-4 md:mt-0 md:ml-8">
                                            <span class="text-primary font-medium text-lg tracking-wide">
                                                {entry.period.clone()}
                                            </span>
                                        </div>
                                    </button>
                                    <Show when=move || open.get()>
                                        <p class="px-4 pb-6 text-foreground/70 leading-relaxed">
                                            {summary.clone()}
                                        </p>
                                    </Show>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </section>
    }
}
