use std::time::Duration;

use leptos::prelude::*;

use crate::content;
use crate::prefs::use_prefs;

/// Tick length for the typed-text cycler.
const TYPE_TICK_MS: u64 = 50;
/// Ticks to hold a fully typed string before deleting it (2s).
const HOLD_TICKS: u32 = 40;

/// Stage boundaries of the one-shot entry animation: logo reveal,
/// particle burst, fade-out/done.
const WELCOME_STAGES_MS: [u64; 3] = [300, 1600, 2600];

/// The typed-text loop as a plain state machine: type one character per
/// tick, hold, delete one per tick, advance to the next string and wrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    texts: Vec<Vec<char>>,
    index: usize,
    shown: usize,
    deleting: bool,
    hold: u32,
}

impl Typewriter {
    pub fn new(texts: Vec<String>) -> Self {
        Self {
            texts: texts.into_iter().map(|t| t.chars().collect()).collect(),
            index: 0,
            shown: 0,
            deleting: false,
            hold: 0,
        }
    }

    pub fn current(&self) -> String {
        self.texts
            .get(self.index)
            .map(|text| text[..self.shown].iter().collect())
            .unwrap_or_default()
    }

    /// Advances one tick. Returns true when the visible text changed.
    pub fn tick(&mut self) -> bool {
        let Some(full) = self.texts.get(self.index) else {
            return false;
        };
        if self.hold > 0 {
            self.hold -= 1;
            return false;
        }
        if !self.deleting {
            if self.shown < full.len() {
                self.shown += 1;
                if self.shown == full.len() {
                    self.deleting = true;
                    self.hold = HOLD_TICKS;
                }
                true
            } else {
                // zero-length entry, skip straight to advancing
                self.deleting = true;
                false
            }
        } else if self.shown > 0 {
            self.shown -= 1;
            true
        } else {
            self.deleting = false;
            self.index = (self.index + 1) % self.texts.len();
            false
        }
    }
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let prefs = use_prefs();
    let t = move |key: &'static str| move || prefs.t(key);

    // 0 = overlay only, 1 = logo reveal, 2 = particle burst, 3 = done
    let (welcome_stage, set_welcome_stage) = signal(0u8);
    let welcome_done = Memo::new(move |_| welcome_stage.get() >= 3);

    // One-shot entry sequence. The header stays hidden until the last
    // stage lands; pending timeouts are cancelled if the section unmounts
    // mid-animation.
    let welcome_timers = StoredValue::new(Vec::<TimeoutHandle>::new());
    Effect::new(move |_| {
        prefs.hide_header();
        let mut timers = Vec::new();
        for (stage, at_ms) in WELCOME_STAGES_MS.iter().enumerate() {
            let stage = stage as u8 + 1;
            let result = set_timeout_with_handle(
                move || {
                    set_welcome_stage(stage);
                    if stage == 3 {
                        prefs.show_header();
                    }
                },
                Duration::from_millis(*at_ms),
            );
            if let Ok(handle) = result {
                timers.push(handle);
            }
        }
        welcome_timers.set_value(timers);
    });
    on_cleanup(move || {
        for handle in welcome_timers.get_value() {
            handle.clear();
        }
    });

    // Typed-text cycler, restarted whenever the locale changes.
    let roles = Memo::new(move |_| content::translate_list(prefs.language.get(), "hero.roles"));
    let typewriter = StoredValue::new(Typewriter::new(Vec::new()));
    let (typed, set_typed) = signal(String::new());
    Effect::new(move |_| {
        typewriter.set_value(Typewriter::new(roles.get()));
        set_typed(String::new());
    });
    Effect::new(move |_| {
        let interval = set_interval_with_handle(
            move || {
                let mut changed = false;
                typewriter.update_value(|tw| changed = tw.tick());
                if changed {
                    set_typed(typewriter.with_value(|tw| tw.current()));
                }
            },
            Duration::from_millis(TYPE_TICK_MS),
        );
        if let Ok(interval) = interval {
            on_cleanup(move || interval.clear());
        }
    });

    let logo = move || content::theme_logo(prefs.theme.get());

    view! {
        <Show when=move || !welcome_done.get()>
            <div class="fixed inset-0 z-[99] pointer-events-none flex items-center justify-center welcome-overlay">
                <img
                    src=logo
                    alt="Logo"
                    class=move || {
                        match welcome_stage.get() {
                            0 => "welcome-logo",
                            1 => "welcome-logo is-revealed",
                            _ => "welcome-logo is-bursting",
                        }
                    }
                />
            </div>
        </Show>

        <section
            id="top"
            class=move || {
                if welcome_done.get() {
                    "hero-section relative overflow-hidden flex items-center min-h-screen opacity-100 transition-opacity duration-700"
                } else {
                    "hero-section relative overflow-hidden flex items-center min-h-screen opacity-0"
                }
            }
        >
            <div class="container mx-auto px-6">
                <div class="glass-card rounded-3xl p-8 md:p-16 flex items-center min-h-[60vh]">
                    <div class="flex flex-col gap-6 max-w-full">
                        <div class="inline-flex items-center gap-3 glass-card rounded-full w-fit px-4 py-2">
                            <img src=logo alt="logo" class="w-8 h-8 object-contain rounded-full" />
                            <span class="text-foreground/80 text-sm">{t("hero.greeting")}</span>
                        </div>

                        <h1 class="font-bold leading-tight text-foreground text-4xl md:text-7xl">
                            <span class="block bg-gradient-to-r from-[#00C8FF] to-[#0072FF] bg-clip-text text-transparent">
                                {t("hero.name")}
                            </span>
                            <span class="inline-block min-h-[1.2em] mt-2">
                                {move || typed.get()}
                                <span class="opacity-0">"A"</span>
                            </span>
                        </h1>

                        <a
                            href="#about"
                            class="group flex items-center gap-3 text-foreground/60 hover:text-primary transition-colors pt-4 w-fit"
                        >
                            <span>{t("hero.scroll")}</span>
                            <span class="group-hover:translate-y-1 transition-transform">"↓"</span>
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_until_shows(tw: &mut Typewriter, expected: &str, max_ticks: u32) {
        for _ in 0..max_ticks {
            tw.tick();
            if tw.current() == expected {
                return;
            }
        }
        panic!(
            "never reached {expected:?}, stuck at {:?}",
            tw.current()
        );
    }

    #[test]
    fn types_one_character_per_tick() {
        let mut tw = Typewriter::new(vec!["abc".to_string()]);
        assert_eq!(tw.current(), "");
        assert!(tw.tick());
        assert_eq!(tw.current(), "a");
        assert!(tw.tick());
        assert_eq!(tw.current(), "ab");
        assert!(tw.tick());
        assert_eq!(tw.current(), "abc");
    }

    #[test]
    fn holds_after_the_full_string_then_deletes() {
        let mut tw = Typewriter::new(vec!["hi".to_string()]);
        tw.tick();
        tw.tick();
        assert_eq!(tw.current(), "hi");

        // the hold window has no visible change
        for _ in 0..HOLD_TICKS {
            assert!(!tw.tick());
            assert_eq!(tw.current(), "hi");
        }

        assert!(tw.tick());
        assert_eq!(tw.current(), "h");
        assert!(tw.tick());
        assert_eq!(tw.current(), "");
    }

    #[test]
    fn wraps_to_the_first_string_after_the_last() {
        let mut tw = Typewriter::new(vec!["ab".to_string(), "c".to_string()]);

        tick_until_shows(&mut tw, "c", 200);
        tick_until_shows(&mut tw, "ab", 200);
    }

    #[test]
    fn never_splits_multibyte_characters() {
        let mut tw = Typewriter::new(vec!["héllo".to_string()]);
        for _ in 0..3 {
            tw.tick();
        }
        assert_eq!(tw.current(), "hél");
    }

    #[test]
    fn empty_text_list_is_inert() {
        let mut tw = Typewriter::new(Vec::new());
        assert!(!tw.tick());
        assert_eq!(tw.current(), "");
    }
}
