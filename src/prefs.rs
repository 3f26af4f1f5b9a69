use std::fmt;

use leptos::prelude::*;

use crate::content;

/// Display languages the site ships content for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Id,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Id];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Id => "id",
        }
    }

    /// Lenient parse for values read back from storage. Anything
    /// unrecognized is treated as "nothing stored".
    pub fn from_tag(tag: &str) -> Option<Language> {
        match tag {
            "en" => Some(Language::En),
            "id" => Some(Language::Id),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Theme> {
        match tag {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Resolution order: stored value, else the system color-scheme
    /// preference, else dark.
    pub fn resolve(stored: Option<&str>, prefers_dark: Option<bool>) -> Theme {
        if let Some(theme) = stored.and_then(Theme::from_tag) {
            return theme;
        }
        match prefers_dark {
            Some(false) => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared preference state, provided once via context and read by every
/// section. Writes go through the methods below so all consumers observe
/// the same signal.
#[derive(Debug, Clone, Copy)]
pub struct Prefs {
    pub language: RwSignal<Language>,
    pub theme: RwSignal<Theme>,
    pub header_visible: RwSignal<bool>,
}

impl Prefs {
    fn new() -> Self {
        Self {
            language: RwSignal::new(Language::default()),
            theme: RwSignal::new(Theme::Dark),
            // hidden until the entry animation finishes
            header_visible: RwSignal::new(false),
        }
    }

    pub fn set_language(&self, lang: Language) {
        self.language.set(lang);
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggled());
    }

    pub fn show_header(&self) {
        self.header_visible.set(true);
    }

    pub fn hide_header(&self) {
        self.header_visible.set(false);
    }

    pub fn toggle_header(&self) {
        self.header_visible.update(|v| *v = !*v);
    }

    /// Translates `key` for the current language. Missing keys come back
    /// verbatim rather than erroring.
    pub fn t(&self, key: &str) -> String {
        content::translate(self.language.get(), key)
    }
}

pub fn provide_prefs() -> Prefs {
    let prefs = Prefs::new();
    provide_context(prefs);
    prefs
}

pub fn use_prefs() -> Prefs {
    expect_context::<Prefs>()
}

/// Seeds the preference signals from local storage (falling back to the
/// system color scheme for the theme), then keeps storage and the
/// document element in sync with later changes. Storage writes are
/// best-effort; the signals stay authoritative either way.
#[cfg(feature = "hydrate")]
pub fn restore_and_persist(prefs: Prefs) {
    use codee::string::FromToStringCodec;
    use leptos_use::storage::use_local_storage;
    use leptos_use::use_preferred_dark;

    let (stored_lang, set_stored_lang, _) =
        use_local_storage::<String, FromToStringCodec>("language");
    let (stored_theme, set_stored_theme, _) =
        use_local_storage::<String, FromToStringCodec>("theme");
    let prefers_dark = use_preferred_dark();

    Effect::watch(
        || (),
        move |_, _, _| {
            if let Some(lang) = Language::from_tag(&stored_lang.get_untracked()) {
                prefs.language.set(lang);
            }
            let stored = stored_theme.get_untracked();
            let stored = (!stored.is_empty()).then_some(stored);
            prefs.theme.set(Theme::resolve(
                stored.as_deref(),
                Some(prefers_dark.get_untracked()),
            ));
        },
        true,
    );

    Effect::new(move |_| {
        let lang = prefs.language.get();
        set_stored_lang.set(lang.to_string());
        if let Some(root) = document().document_element() {
            let _ = root.set_attribute("lang", lang.as_str());
        }
    });

    Effect::new(move |_| {
        let theme = prefs.theme.get();
        set_stored_theme.set(theme.to_string());
        if let Some(root) = document().document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    });
}

#[cfg(not(feature = "hydrate"))]
pub fn restore_and_persist(_prefs: Prefs) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_toggle_round_trips() {
        let theme = Theme::Dark;
        assert_eq!(theme.toggled().toggled(), theme);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn theme_resolution_prefers_stored_value() {
        assert_eq!(Theme::resolve(Some("light"), Some(true)), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), Some(false)), Theme::Dark);
    }

    #[test]
    fn theme_resolution_falls_back_to_system_then_dark() {
        assert_eq!(Theme::resolve(None, Some(false)), Theme::Light);
        assert_eq!(Theme::resolve(None, Some(true)), Theme::Dark);
        assert_eq!(Theme::resolve(None, None), Theme::Dark);
        // garbage in storage is the same as nothing stored
        assert_eq!(Theme::resolve(Some("solarized"), None), Theme::Dark);
    }

    #[test]
    fn language_parses_leniently() {
        assert_eq!(Language::from_tag("en"), Some(Language::En));
        assert_eq!(Language::from_tag("id"), Some(Language::Id));
        assert_eq!(Language::from_tag("fr"), None);
        assert_eq!(Language::from_tag(""), None);
    }

    #[test]
    fn language_round_trips_through_display() {
        for lang in Language::ALL {
            assert_eq!(Language::from_tag(&lang.to_string()), Some(lang));
        }
    }
}
