use leptos::prelude::*;

use crate::content;
use crate::prefs::use_prefs;

/// Skill tabs with one active detail pane. The active tab is tracked by
/// entry id so it survives a locale switch.
#[component]
pub fn ExpertiseSection() -> impl IntoView {
    let prefs = use_prefs();
    let t = move |key: &'static str| move || prefs.t(key);

    let skills = Memo::new(move |_| content::expertise(prefs.language.get()));
    let (active, set_active) = signal(None::<String>);
    let active_skill = Memo::new(move |_| {
        let skills = skills.get();
        active
            .get()
            .and_then(|id| skills.iter().find(|s| s.id == id).cloned())
            .or_else(|| skills.first().cloned())
    });

    view! {
        <section id="expertise" class="relative py-24 reveal-on-scroll">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto mb-16">
                    <div class="flex items-center gap-4 mb-6">
                        <span class="text-sm text-primary font-medium tracking-wider">
                            {t("expertise.section")}
                        </span>
                        <div class="h-px bg-border flex-1"></div>
                    </div>
                    <h2 class="text-4xl md:text-5xl font-bold text-foreground leading-tight">
                        {t("expertise.title")}
                    </h2>
                </div>

                <div class="max-w-4xl mx-auto grid grid-cols-1 md:grid-cols-3 gap-8">
                    <nav class="flex md:flex-col flex-wrap gap-2">
                        <For
                            each=move || skills.get()
                            key=|skill| skill.id.clone()
                            children=move |skill| {
                                let id = skill.id.clone();
                                let is_active = {
                                    let id = id.clone();
                                    move || {
                                        active_skill.get().is_some_and(|s| s.id == id)
                                    }
                                };
                                view! {
                                    <button
                                        class=move || {
                                            if is_active() {
                                                "text-left px-4 py-3 rounded-xl bg-primary/10 text-primary font-medium"
                                            } else {
                                                "text-left px-4 py-3 rounded-xl text-foreground/60 hover:text-foreground hover:bg-foreground/5"
                                            }
                                        }
                                        on:click=move |_| set_active(Some(id.clone()))
                                    >
                                        {skill.name.clone()}
                                    </button>
                                }
                            }
                        />
                    </nav>

                    <div class="md:col-span-2 glass-card rounded-2xl p-8">
                        {move || {
                            active_skill
                                .get()
                                .map(|skill| {
                                    view! {
                                        <h3 class="text-2xl font-semibold text-foreground mb-4">
                                            {skill.title}
                                        </h3>
                                        <p class="text-foreground/70 leading-relaxed">
                                            {skill.description}
                                        </p>
                                    }
                                })
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}
