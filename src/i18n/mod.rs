//! Localized display strings.
//!
//! Translations are plain structs of `&'static str`, checked at compile time.
//! The active language is carried by a [`Translator`] value owned by whoever
//! renders text; there is no process-wide language switch.

mod en;
pub mod keys;
mod tr;

pub use keys::*;

use crate::domain::entities::EntityKind;

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    En,
    /// Turkish is the fallback language.
    #[default]
    Tr,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Tr]
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Some(Language::En),
            "tr" | "tr-tr" => Some(Language::Tr),
            _ => None,
        }
    }

    /// Resolve a language code, falling back to the default language.
    pub fn resolve(code: &str) -> Language {
        Self::from_code(code).unwrap_or_default()
    }
}

/// Hands out the string table for one language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn texts(&self) -> &'static Translations {
        match self.language {
            Language::En => &en::TRANSLATIONS,
            Language::Tr => &tr::TRANSLATIONS,
        }
    }

    pub fn entity(&self, kind: EntityKind) -> &'static EntityTexts {
        let texts = self.texts();
        match kind {
            EntityKind::Category => &texts.category,
            EntityKind::Post => &texts.post,
        }
    }
}

/// Substitute `{key}` placeholders in a template.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in values {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_fall_back_to_turkish() {
        assert_eq!(Language::resolve("de"), Language::Tr);
        assert_eq!(Language::resolve("EN"), Language::En);
        assert_eq!(Language::from_code("xx"), None);
    }

    #[test]
    fn translator_switches_tables() {
        let en = Translator::new(Language::En);
        let tr = Translator::new(Language::Tr);
        assert_eq!(en.texts().common.create, "Create");
        assert_eq!(tr.texts().common.create, "Ekle");
        assert_eq!(en.entity(EntityKind::Category).name, "Blog Category Name");
        assert_eq!(tr.entity(EntityKind::Category).name, "Blog Kategori Adı");
    }

    #[test]
    fn fill_replaces_every_placeholder() {
        let text = fill("Page {page} / {total}", &[("page", "2"), ("total", "9")]);
        assert_eq!(text, "Page 2 / 9");
        assert_eq!(fill("no placeholders", &[("x", "y")]), "no placeholders");
    }

    #[test]
    fn every_language_has_delete_confirmation_with_name() {
        for language in Language::all() {
            let texts = Translator::new(*language).texts();
            assert!(texts.common.confirm_delete.contains("{name}"));
            assert!(texts.pagination.page_of.contains("{page}"));
            assert!(texts.common.total_records.contains("{count}"));
            assert!(texts.common.suggestions.contains("{names}"));
        }
    }
}
