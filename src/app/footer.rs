use leptos::prelude::*;

use crate::content;
use crate::prefs::use_prefs;

const EXPLORE_LINKS: [(&str, &str); 5] = [
    ("#about", "nav.about"),
    ("#expertise", "nav.expertise"),
    ("#experience", "nav.experience"),
    ("#projects", "nav.projects"),
    ("#contact", "nav.contact"),
];

const CONNECT_LINKS: [(&str, &str); 3] = [
    ("https://github.com/aryapradana", "GitHub"),
    ("https://www.linkedin.com/in/aryapradana", "LinkedIn"),
    ("https://dribbble.com/aryapradana", "Dribbble"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let prefs = use_prefs();
    let t = move |key: &'static str| move || prefs.t(key);
    let logo = move || content::theme_logo(prefs.theme.get());

    view! {
        <footer class="relative border-t border-border/30 py-16">
            <div class="container mx-auto px-6">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-12 mb-12">
                    <div class="flex flex-col gap-4">
                        <a href="#" class="w-fit">
                            <img src=logo alt="Arya Pradana" class="h-10 w-auto" />
                        </a>
                        <p class="text-foreground/60 leading-relaxed max-w-sm">
                            {t("footer.tagline")}
                        </p>
                    </div>

                    <div>
                        <h4 class="text-foreground font-semibold mb-4">{t("footer.explore")}</h4>
                        <ul class="flex flex-col gap-2">
                            {EXPLORE_LINKS
                                .into_iter()
                                .map(|(href, key)| {
                                    view! {
                                        <li>
                                            <a
                                                href=href
                                                class="text-foreground/60 hover:text-primary transition-colors"
                                            >
                                                {move || prefs.t(key)}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-foreground font-semibold mb-4">{t("footer.connect")}</h4>
                        <ul class="flex flex-col gap-2">
                            {CONNECT_LINKS
                                .into_iter()
                                .map(|(href, label)| {
                                    view! {
                                        <li>
                                            <a
                                                href=href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="text-foreground/60 hover:text-primary transition-colors"
                                            >
                                                {label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="border-t border-border/30 pt-8 text-center text-foreground/40 text-sm">
                    {move || format!("© 2026 Arya Pradana. {}", prefs.t("footer.rights"))}
                </div>
            </div>
        </footer>
    }
}
