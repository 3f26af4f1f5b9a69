use leptos::prelude::*;

use crate::prefs::{use_prefs, Language, Theme};

/// Fixed page header: section anchors, the language switcher, and the
/// theme toggle. Slides out of view until the hero's entry animation
/// flips the visibility flag.
#[component]
pub fn Header() -> impl IntoView {
    let prefs = use_prefs();
    let t = move |key: &'static str| move || prefs.t(key);

    let nav = [
        ("#projects", "nav.projects"),
        ("#experience", "nav.experience"),
        ("#faq", "nav.faq"),
        ("#contact", "nav.contact"),
    ];

    view! {
        <header class=move || {
            if prefs.header_visible.get() {
                "site-header fixed top-0 left-0 right-0 z-50 glass-card transition-transform duration-500"
            } else {
                "site-header fixed top-0 left-0 right-0 z-50 glass-card transition-transform duration-500 -translate-y-full"
            }
        }>
            <div class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <a href="#top" class="flex items-center space-x-2">
                        <div class="w-8 h-8 rounded-full bg-primary flex items-center justify-center">
                            <span class="text-primary-foreground font-bold text-sm">"AP"</span>
                        </div>
                    </a>

                    <nav class="hidden md:flex items-center space-x-8">
                        {nav
                            .into_iter()
                            .map(|(href, key)| {
                                view! {
                                    <a
                                        href=href
                                        class="text-foreground/80 hover:text-foreground transition-colors text-sm font-medium"
                                    >
                                        {t(key)}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="flex items-center space-x-2">
                        <LanguageSwitcher />
                        <ThemeToggle />
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
fn LanguageSwitcher() -> impl IntoView {
    let prefs = use_prefs();

    view! {
        <div class="flex items-center rounded-full border border-foreground/20 overflow-hidden">
            {Language::ALL
                .into_iter()
                .map(|lang| {
                    view! {
                        <button
                            class=move || {
                                if prefs.language.get() == lang {
                                    "px-3 py-1 text-xs font-medium uppercase bg-primary text-primary-foreground"
                                } else {
                                    "px-3 py-1 text-xs font-medium uppercase text-foreground/60 hover:text-foreground"
                                }
                            }
                            on:click=move |_| prefs.set_language(lang)
                        >
                            {lang.as_str()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let prefs = use_prefs();

    view! {
        <button
            class="w-8 h-8 rounded-full border border-foreground/20 flex items-center justify-center text-foreground/80 hover:text-foreground"
            aria-label="Toggle color theme"
            on:click=move |_| prefs.toggle_theme()
        >
            {move || {
                match prefs.theme.get() {
                    Theme::Dark => "☾",
                    Theme::Light => "☀",
                }
            }}
        </button>
    }
}
