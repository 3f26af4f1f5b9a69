mod about;
mod clients;
mod contact;
mod experience;
mod expertise;
mod faq;
mod footer;
mod header;
mod hero;
mod newsletter;
mod portfolio;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::prefs::{provide_prefs, restore_and_persist};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="icon" type="image/svg+xml" href="/images/personal-logo-dark.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Shared language / theme / header-visibility state, read by every
    // section below. Restoration from local storage only happens on the
    // client.
    let prefs = provide_prefs();
    restore_and_persist(prefs);

    view! {
        // sets the document title
        <Title formatter=|title| format!("Arya Pradana - {title}") />

        // a single route: the site is one scrolling page, the Router is
        // only SSR plumbing
        <Router>
            <header::Header />
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <footer::Footer />
        </Router>
    }
}

/// The single scrolling page: every section reads the preference store and
/// content table on its own; there is no cross-section orchestration beyond
/// the header-visibility flag the hero flips.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <hero::HeroSection />
        <about::AboutSection />
        <clients::ClientsSection />
        <expertise::ExpertiseSection />
        <experience::ExperienceSection />
        <portfolio::PortfolioSection />
        <faq::FaqSection />
        <newsletter::NewsletterSection />
        <contact::ContactSection />
    }
}
