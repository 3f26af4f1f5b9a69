use leptos::prelude::*;

use crate::prefs::use_prefs;

#[component]
pub fn AboutSection() -> impl IntoView {
    let prefs = use_prefs();
    let t = move |key: &'static str| move || prefs.t(key);

    view! {
        <section id="about" class="relative py-24 reveal-on-scroll">
            <div class="container mx-auto px-6">
                <div class="glass-card rounded-3xl p-8 md:p-16">
                    <p class="text-foreground/40 uppercase tracking-wider text-sm mb-8">
                        {t("about.section")}
                    </p>
                    <div class="flex flex-col gap-8">
                        <h2 class="font-normal text-foreground text-2xl md:text-4xl leading-snug">
                            {t("about.title")}
                        </h2>
                        <p class="text-foreground/60 max-w-4xl text-2xl md:text-4xl leading-snug">
                            {t("about.description")}
                        </p>
                        <p class="text-foreground/60 text-base md:text-lg pt-4">
                            {t("about.current_job")}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
