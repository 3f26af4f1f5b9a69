use std::time::Duration;

use leptos::prelude::*;

use crate::catalog::{CatalogState, Filter, Phase, FILTER_DELAY_MS, PAGE_DELAY_MS, PAGE_SIZE};
use crate::content::{self, ProjectRecord};
use crate::prefs::{use_prefs, Theme};

/// How many records the section spotlights above the fold. Purely a
/// presentation choice; the underlying data order is never reordered.
const FEATURED_COUNT: usize = 3;

/// The portfolio catalog: featured cards, a "view all" overlay with
/// filter tabs and pagination, and a detail modal. All transition rules
/// live in [`CatalogState`]; this component only schedules the commits.
#[component]
pub fn PortfolioSection() -> impl IntoView {
    let prefs = use_prefs();
    let t = move |key: &'static str| move || prefs.t(key);

    let projects = Memo::new(move |_| content::projects(prefs.language.get()));
    let catalog = RwSignal::new(CatalogState::new());
    let (sheet_open, set_sheet_open) = signal(false);

    // At most one transition is in flight, so a single handle suffices.
    // Cancelled on unmount so a disposed section never receives a late
    // commit; `try_update` covers a callback that outlives the signal.
    let commit_timer = StoredValue::new(None::<TimeoutHandle>);
    let schedule_commit = move |delay_ms: u64| {
        let result = set_timeout_with_handle(
            move || {
                catalog.try_update(|c| {
                    c.commit();
                });
            },
            Duration::from_millis(delay_ms),
        );
        if let Ok(handle) = result {
            commit_timer.set_value(Some(handle));
        }
    };
    on_cleanup(move || {
        if let Some(handle) = commit_timer.get_value() {
            handle.clear();
        }
    });

    let on_filter = move |filter: Filter| {
        let began = catalog
            .try_update(|c| c.request_filter(filter))
            .unwrap_or(false);
        if began {
            schedule_commit(FILTER_DELAY_MS);
        }
    };

    let on_page = move |page: usize| {
        let all = projects.get_untracked();
        let began = catalog
            .try_update(|c| c.request_page(page, &all))
            .unwrap_or(false);
        if began {
            schedule_commit(PAGE_DELAY_MS);
        }
    };

    let on_select = Callback::new(move |id: u32| {
        catalog.update(|c| c.select(id));
    });
    let on_close = Callback::new(move |()| {
        catalog.update(|c| c.close_detail());
    });

    let featured = Memo::new(move |_| {
        projects
            .get()
            .into_iter()
            .take(FEATURED_COUNT)
            .collect::<Vec<_>>()
    });
    let visible = Memo::new(move |_| {
        let all = projects.get();
        catalog.with(|c| c.visible(&all).into_iter().cloned().collect::<Vec<_>>())
    });
    let total_pages = Memo::new(move |_| {
        let all = projects.get();
        catalog.with(|c| c.total_pages(&all))
    });
    let current_page = Memo::new(move |_| catalog.with(|c| c.page()));
    let transitioning = Memo::new(move |_| catalog.with(|c| c.is_transitioning()));
    let filter_changing = Memo::new(move |_| catalog.with(|c| c.phase() == Phase::FilterTransition));
    let selected = Memo::new(move |_| {
        let all = projects.get();
        catalog.with(|c| {
            c.selected()
                .and_then(|id| all.iter().find(|p| p.id == id).cloned())
        })
    });

    view! {
        <section id="projects" class="relative py-24 reveal-on-scroll">
            <div class="container mx-auto px-6">
                <div class="glass-card rounded-3xl p-8 md:p-16">
                    <div class="flex items-start justify-between mb-12">
                        <div>
                            <p class="text-foreground/40 uppercase tracking-wider text-sm mb-4">
                                {t("porto.section")}
                            </p>
                            <h2 class="text-foreground font-bold text-2xl md:text-4xl leading-relaxed">
                                {t("porto.title")}
                            </h2>
                        </div>
                        <button
                            class="flex items-center gap-2 rounded-full text-foreground/80 hover:text-foreground px-6 py-3"
                            on:click=move |_| set_sheet_open(true)
                        >
                            {t("porto.view_all")}
                        </button>
                    </div>

                    <div class="grid grid-cols-1 gap-8">
                        <For
                            each=move || featured.get()
                            key=|project| project.id
                            children=move |project| {
                                view! { <FeaturedCard project on_select /> }
                            }
                        />
                    </div>
                </div>
            </div>

            <Show when=move || sheet_open.get()>
                <div class="fixed inset-0 z-50 flex justify-end">
                    <div
                        class="absolute inset-0 bg-background/60 backdrop-blur-sm"
                        on:click=move |_| set_sheet_open(false)
                    ></div>
                    <div class="relative w-full sm:max-w-4xl h-full overflow-y-auto glass-card p-8 flex flex-col">
                        <div class="flex items-center justify-between mb-8">
                            <h3 class="text-xl md:text-2xl font-semibold text-foreground">
                                {t("porto.all_projects")}
                            </h3>
                            <button
                                class="text-foreground/60 hover:text-foreground"
                                on:click=move |_| set_sheet_open(false)
                            >
                                {t("porto.close")}
                            </button>
                        </div>

                        <div class="flex flex-wrap gap-3 mb-8">
                            {Filter::ALL
                                .into_iter()
                                .map(|filter| {
                                    view! {
                                        <button
                                            class=move || {
                                                if catalog.with(|c| c.filter() == filter) {
                                                    "rounded-full px-5 py-2 text-sm bg-primary text-primary-foreground"
                                                } else {
                                                    "rounded-full px-5 py-2 text-sm border border-foreground/20 text-foreground/70 hover:bg-primary/10"
                                                }
                                            }
                                            disabled=move || transitioning.get()
                                            on:click=move |_| on_filter(filter)
                                        >
                                            {filter.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="relative overflow-hidden flex-1 mb-8">
                            <Show
                                when=move || !filter_changing.get()
                                fallback=|| {
                                    (0..PAGE_SIZE)
                                        .map(|_| view! { <div class="skeleton-card rounded-xl"></div> })
                                        .collect_view()
                                }
                            >
                                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                                    <For
                                        each=move || visible.get()
                                        key=|project| project.id
                                        children=move |project| {
                                            view! { <ProjectCard project on_select /> }
                                        }
                                    />
                                </div>
                            </Show>
                        </div>

                        <Show when=move || { total_pages.get() > 1 }>
                            <nav class="flex items-center justify-center gap-2">
                                <button
                                    class="pagination-button"
                                    disabled=move || current_page.get() == 1 || transitioning.get()
                                    on:click=move |_| on_page(current_page.get_untracked() - 1)
                                >
                                    "‹"
                                </button>
                                <For
                                    each=move || 1..=total_pages.get()
                                    key=|page| *page
                                    children=move |page| {
                                        view! {
                                            <button
                                                class=move || {
                                                    if current_page.get() == page {
                                                        "pagination-button is-active"
                                                    } else {
                                                        "pagination-button"
                                                    }
                                                }
                                                disabled=move || transitioning.get()
                                                on:click=move |_| on_page(page)
                                            >
                                                {page}
                                            </button>
                                        }
                                    }
                                />
                                <button
                                    class="pagination-button"
                                    disabled=move || {
                                        current_page.get() == total_pages.get() || transitioning.get()
                                    }
                                    on:click=move |_| on_page(current_page.get_untracked() + 1)
                                >
                                    "›"
                                </button>
                            </nav>
                        </Show>
                    </div>
                </div>
            </Show>

            {move || {
                selected
                    .get()
                    .map(|project| view! { <ProjectDetail project on_close /> })
            }}
        </section>
    }
}

/// JS one-liner swapping a broken image to the given theme's logo.
fn image_error_swap(theme: Theme) -> String {
    format!("this.onerror=null;this.src='{}'", content::theme_logo(theme))
}

/// Resolves a record's image, falling back to the theme logo when the
/// record carries none (or the asset is broken, via `onerror` swap).
fn project_image(project: &ProjectRecord) -> impl Fn() -> String + Clone {
    let prefs = use_prefs();
    let image = project.image.clone();
    move || {
        image
            .clone()
            .unwrap_or_else(|| content::theme_logo(prefs.theme.get()).to_string())
    }
}

#[component]
fn FeaturedCard(project: ProjectRecord, #[prop(into)] on_select: Callback<u32>) -> impl IntoView {
    let prefs = use_prefs();
    let id = project.id;
    let src = project_image(&project);

    view! {
        <div
            class="glass-card rounded-2xl overflow-hidden group cursor-pointer transition-all duration-500 hover:glow-effect"
            on:click=move |_| on_select.run(id)
        >
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-0 h-full">
                <div class="flex flex-col justify-between order-2 lg:order-1 p-8 md:p-12">
                    <div>
                        <h3 class="font-bold text-foreground group-hover:text-primary transition-colors text-2xl md:text-3xl mb-4">
                            {project.title.clone()}
                        </h3>
                        <p class="text-foreground/60 text-lg mb-5">{project.subcategory.clone()}</p>
                        <p class="text-foreground/70 leading-relaxed hidden md:block">
                            {project.description.clone()}
                        </p>
                    </div>
                    <div class="flex items-center flex-wrap gap-10 mt-10">
                        {project
                            .country
                            .clone()
                            .map(|country| {
                                view! {
                                    <MetaField value=country label=Signal::derive(move || prefs.t("porto.country")) />
                                }
                            })}
                        {project
                            .duration
                            .clone()
                            .map(|duration| {
                                view! {
                                    <MetaField
                                        value=duration
                                        label=Signal::derive(move || prefs.t("porto.duration"))
                                    />
                                }
                            })}
                        <MetaField
                            value=project.year.clone()
                            label=Signal::derive(move || prefs.t("porto.year"))
                        />
                    </div>
                </div>
                <div class="relative aspect-[4/3] lg:h-full overflow-hidden order-1 lg:order-2 bg-muted">
                    <img
                        src=src
                        onerror=move || image_error_swap(prefs.theme.get())
                        alt=project.title.clone()
                        class="absolute inset-0 w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: ProjectRecord, #[prop(into)] on_select: Callback<u32>) -> impl IntoView {
    let prefs = use_prefs();
    let id = project.id;
    let src = project_image(&project);

    view! {
        <div
            class="glass-card rounded-xl overflow-hidden group cursor-pointer transition-all duration-300 hover:glow-effect"
            on:click=move |_| on_select.run(id)
        >
            <div class="relative w-full aspect-video overflow-hidden bg-muted">
                <img
                    src=src
                    onerror=move || image_error_swap(prefs.theme.get())
                    alt=project.title.clone()
                    loading="lazy"
                    class="absolute inset-0 w-full h-full object-cover group-hover:scale-105 transition-transform duration-300"
                />
            </div>
            <div class="p-5">
                <h3 class="font-bold text-foreground group-hover:text-primary transition-colors mb-2">
                    {project.title.clone()}
                </h3>
                <p class="text-foreground/60 text-sm">{project.subcategory.clone()}</p>
            </div>
        </div>
    }
}

#[component]
fn ProjectDetail(project: ProjectRecord, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let prefs = use_prefs();
    let t = move |key: &'static str| move || prefs.t(key);

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <div
                class="absolute inset-0 bg-background/70 backdrop-blur-sm"
                on:click=move |_| on_close.run(())
            ></div>
            <div class="relative w-[90vw] max-w-4xl max-h-[90vh] overflow-y-auto glass-card rounded-2xl p-8">
                <div class="flex items-start justify-between mb-4">
                    <h3 class="font-bold text-foreground text-xl md:text-2xl">
                        {project.title.clone()}
                    </h3>
                    <button
                        class="text-foreground/60 hover:text-foreground ml-4"
                        aria-label="Close project detail"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                </div>
                <div class="flex items-center flex-wrap gap-3 text-sm mb-8">
                    <span class="rounded-full bg-primary/10 text-primary px-4 py-1">
                        {project.category.label()}
                    </span>
                    <span class="text-foreground/60">"•"</span>
                    <span class="text-foreground/60">{project.year.clone()}</span>
                </div>

                {project
                    .image
                    .clone()
                    .map(|image| {
                        view! {
                            <div class="rounded-lg overflow-hidden bg-foreground/5 max-w-md mx-auto mb-8">
                                <img
                                    src=image
                                    alt=project.title.clone()
                                    loading="lazy"
                                    class="w-full h-auto object-contain"
                                />
                            </div>
                        }
                    })}

                <div class="grid grid-cols-1 md:grid-cols-2 gap-10">
                    <div class="flex flex-col gap-8">
                        <div>
                            <h4 class="font-semibold text-foreground mb-3">
                                {t("porto.overview")}
                            </h4>
                            <p class="text-foreground/70 leading-relaxed">
                                {project.description.clone()}
                            </p>
                        </div>

                        <Show when={
                            let has_tech = !project.technologies.is_empty();
                            move || has_tech
                        }>
                            <div>
                                <h4 class="font-semibold text-foreground mb-3">
                                    {t("porto.technologies")}
                                </h4>
                                <div class="flex flex-wrap gap-3">
                                    {project
                                        .technologies
                                        .clone()
                                        .into_iter()
                                        .map(|tech| {
                                            view! {
                                                <span class="rounded-full bg-foreground/5 border border-foreground/10 text-foreground/70 px-4 py-1 text-sm">
                                                    {tech}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </Show>

                        <Show when={
                            let has_links = !project.links.is_empty();
                            move || has_links
                        }>
                            <div>
                                <h4 class="font-semibold text-foreground mb-3">
                                    {t("porto.links")}
                                </h4>
                                <div class="flex flex-col gap-3">
                                    {project
                                        .links
                                        .clone()
                                        .into_iter()
                                        .map(|link| {
                                            view! {
                                                <a
                                                    href=link.clone()
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="rounded-full bg-foreground/5 border border-foreground/10 text-foreground/70 hover:text-foreground px-4 py-1 text-sm w-fit"
                                                >
                                                    {link.clone()}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </Show>
                    </div>

                    <div class="flex flex-col gap-8">
                        <div class="grid grid-cols-2 gap-5">
                            {project
                                .country
                                .clone()
                                .map(|country| {
                                    view! {
                                        <MetaField
                                            value=country
                                            label=Signal::derive(move || prefs.t("porto.country"))
                                        />
                                    }
                                })}
                            {project
                                .duration
                                .clone()
                                .map(|duration| {
                                    view! {
                                        <MetaField
                                            value=duration
                                            label=Signal::derive(move || prefs.t("porto.duration"))
                                        />
                                    }
                                })}
                            <MetaField
                                value=project.year.clone()
                                label=Signal::derive(move || prefs.t("porto.year"))
                            />
                            <MetaField
                                value=project.category.label().to_string()
                                label=Signal::derive(move || prefs.t("porto.category"))
                            />
                        </div>

                        {project
                            .client_testimonial
                            .clone()
                            .map(|quote| {
                                view! {
                                    <div>
                                        <h4 class="font-semibold text-foreground mb-3">
                                            {t("porto.testimonial")}
                                        </h4>
                                        <blockquote class="italic text-foreground/70 border-l-4 border-primary rounded bg-foreground/5 p-5">
                                            {format!("\u{201c}{quote}\u{201d}")}
                                        </blockquote>
                                    </div>
                                }
                            })}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MetaField(
    value: String,
    #[prop(into)] label: Signal<String>,
) -> impl IntoView {
    view! {
        <div>
            <p class="text-primary font-medium text-lg">{value}</p>
            <p class="text-foreground/40 text-sm">{label}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_images_swap_to_the_active_themes_logo() {
        let dark = image_error_swap(Theme::Dark);
        let light = image_error_swap(Theme::Light);

        assert!(dark.starts_with("this.onerror=null;"));
        assert!(dark.contains(content::theme_logo(Theme::Dark)));
        assert!(light.contains(content::theme_logo(Theme::Light)));
        assert_ne!(dark, light);
    }
}
