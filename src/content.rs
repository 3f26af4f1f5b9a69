use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use rust_embed::Embed;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::prefs::{Language, Theme};

static CONTENT_CACHE: LazyLock<DashMap<Language, Arc<LocaleContent>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "locales"]
struct LocaleAssets;

/// Closed set of portfolio categories. Advertised filters are derived from
/// this enum, so a record can never carry a label the filter bar doesn't
/// know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Category {
    Fullstack,
    #[serde(rename = "Front-End")]
    FrontEnd,
    #[serde(rename = "Back-End")]
    BackEnd,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Fullstack => "Fullstack",
            Category::FrontEnd => "Front-End",
            Category::BackEnd => "Back-End",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub subcategory: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    pub year: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub client_testimonial: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpertiseEntry {
    pub id: String,
    pub name: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
struct LocaleContent {
    strings: Value,
    projects: Vec<ProjectRecord>,
    experience: Vec<ExperienceEntry>,
    expertise: Vec<ExpertiseEntry>,
    faq: Vec<FaqEntry>,
}

impl LocaleContent {
    fn empty() -> Self {
        Self {
            strings: Value::Null,
            projects: Vec::new(),
            experience: Vec::new(),
            expertise: Vec::new(),
            faq: Vec::new(),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("locale file not found")]
    MissingLocale,
    #[error("couldn't parse locale file: {0}")]
    Parse(String),
    #[error("duplicate project id {0}")]
    DuplicateProjectId(u32),
}

fn check_unique_ids(projects: &[ProjectRecord]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for project in projects {
        if !seen.insert(project.id) {
            return Err(ContentError::DuplicateProjectId(project.id));
        }
    }
    Ok(())
}

fn load_locale(lang: Language) -> Result<LocaleContent, ContentError> {
    let file = format!("{}.json", lang.as_str());
    let raw = LocaleAssets::get(&file).ok_or(ContentError::MissingLocale)?;
    let content: LocaleContent =
        serde_json::from_slice(&raw.data).map_err(|e| ContentError::Parse(e.to_string()))?;
    check_unique_ids(&content.projects)?;
    Ok(content)
}

fn locale(lang: Language) -> Arc<LocaleContent> {
    if let Some(content) = CONTENT_CACHE.get(&lang) {
        return Arc::clone(&content);
    }
    let content = match load_locale(lang) {
        Ok(content) => content,
        Err(err) => {
            log::error!("failed to load {} content: {err}", lang.as_str());
            if lang == Language::default() {
                // both locale files are embedded in the binary, so this only
                // happens when the embed itself is broken
                LocaleContent::empty()
            } else {
                let fallback = locale(Language::default());
                CONTENT_CACHE.insert(lang, Arc::clone(&fallback));
                return fallback;
            }
        }
    };
    let content = Arc::new(content);
    CONTENT_CACHE.insert(lang, Arc::clone(&content));
    content
}

pub fn projects(lang: Language) -> Vec<ProjectRecord> {
    locale(lang).projects.clone()
}

pub fn experience(lang: Language) -> Vec<ExperienceEntry> {
    locale(lang).experience.clone()
}

pub fn expertise(lang: Language) -> Vec<ExpertiseEntry> {
    locale(lang).expertise.clone()
}

pub fn faq(lang: Language) -> Vec<FaqEntry> {
    locale(lang).faq.clone()
}

fn lookup<'a>(strings: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(strings, |value, part| value.get(part))
}

/// Dot-path lookup in the string table. A missing key degrades to the key
/// itself so a content-authoring gap never turns into a user-visible error.
pub fn translate(lang: Language, key: &str) -> String {
    match lookup(&locale(lang).strings, key) {
        Some(Value::String(s)) => s.clone(),
        Some(_) | None => {
            log::warn!("missing translation key: {key}");
            key.to_string()
        }
    }
}

/// Like [`translate`], for keys holding an ordered list of strings.
pub fn translate_list(lang: Language, key: &str) -> Vec<String> {
    match lookup(&locale(lang).strings, key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        Some(_) | None => {
            log::warn!("missing translation list: {key}");
            Vec::new()
        }
    }
}

/// Placeholder shown when a project record carries no image.
pub fn theme_logo(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "/images/personal-logo-dark.svg",
        Theme::Light => "/images/personal-logo-light.svg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string_paths(value: &Value, prefix: &str, out: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    string_paths(child, &path, out);
                }
            }
            _ => out.push(prefix.to_string()),
        }
    }

    #[test]
    fn both_locales_load() {
        for lang in Language::ALL {
            let content = load_locale(lang).expect("locale file should parse");
            assert!(!content.projects.is_empty());
            assert!(!content.experience.is_empty());
            assert!(!content.expertise.is_empty());
            assert!(!content.faq.is_empty());
        }
    }

    #[test]
    fn locale_string_tables_are_parallel() {
        let en = load_locale(Language::En).unwrap();
        let id = load_locale(Language::Id).unwrap();

        let mut en_paths = Vec::new();
        let mut id_paths = Vec::new();
        string_paths(&en.strings, "", &mut en_paths);
        string_paths(&id.strings, "", &mut id_paths);
        en_paths.sort();
        id_paths.sort();

        assert_eq!(en_paths, id_paths);
    }

    #[test]
    fn project_ids_are_unique_per_locale() {
        for lang in Language::ALL {
            let content = load_locale(lang).unwrap();
            assert!(check_unique_ids(&content.projects).is_ok());
        }
    }

    #[test]
    fn translate_returns_known_keys() {
        assert_eq!(translate(Language::En, "nav.contact"), "Contact");
        assert_eq!(translate(Language::Id, "nav.contact"), "Kontak");
    }

    #[test]
    fn translate_falls_back_to_the_raw_key() {
        assert_eq!(
            translate(Language::En, "nonexistent.key"),
            "nonexistent.key"
        );
    }

    #[test]
    fn hero_roles_are_a_non_empty_list() {
        for lang in Language::ALL {
            assert!(!translate_list(lang, "hero.roles").is_empty());
        }
    }

    #[test]
    fn client_and_newsletter_strings_are_present() {
        for lang in Language::ALL {
            assert!(!translate_list(lang, "clients.names").is_empty());
            assert_ne!(translate(lang, "clients.statement"), "clients.statement");
            assert_ne!(translate(lang, "newsletter.title"), "newsletter.title");
            assert_ne!(translate(lang, "newsletter.consent"), "newsletter.consent");
        }
    }

    #[test]
    fn categories_outside_the_closed_set_are_rejected() {
        let result = serde_json::from_value::<Category>(Value::String("Landing Page".into()));
        assert!(result.is_err());
        let ok = serde_json::from_value::<Category>(Value::String("Front-End".into()));
        assert_eq!(ok.unwrap(), Category::FrontEnd);
    }

    #[test]
    fn duplicate_ids_are_a_load_error() {
        let raw = serde_json::json!({
            "strings": {},
            "projects": [
                {
                    "id": 1, "title": "a", "subcategory": "s", "description": "d",
                    "category": "Fullstack", "year": "2024"
                },
                {
                    "id": 1, "title": "b", "subcategory": "s", "description": "d",
                    "category": "Back-End", "year": "2024"
                }
            ],
            "experience": [],
            "expertise": [],
            "faq": []
        });
        let content: LocaleContent = serde_json::from_value(raw).unwrap();
        match check_unique_ids(&content.projects) {
            Err(ContentError::DuplicateProjectId(1)) => {}
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }
}
