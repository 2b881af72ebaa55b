//! Bilingual page copy, embedded at build time.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::ContentError;
use crate::i18n::Lang;

const PROGRAM_JSON: &str = include_str!("../content/program.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Text {
    pub en: String,
    pub ar: String,
}

impl Text {
    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Ar => &self.ar,
        }
    }
}

/// A titled block: highlight card, curriculum module or FAQ entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entry {
    pub title: Text,
    pub body: Text,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Content {
    pub strings: HashMap<String, Text>,
    pub highlights: Vec<Entry>,
    pub curriculum: Vec<Entry>,
    pub faq: Vec<Entry>,
}

impl Content {
    pub fn load() -> Result<Self, ContentError> {
        Self::parse(PROGRAM_JSON)
    }

    pub fn parse(json: &str) -> Result<Self, ContentError> {
        let content: Content = serde_json::from_str(json)?;
        content.check()?;
        Ok(content)
    }

    /// Every piece of copy must exist in both languages.
    fn check(&self) -> Result<(), ContentError> {
        let keyed = self.strings.iter().map(|(key, text)| (key.clone(), text));
        let entries = [("highlights", &self.highlights), ("curriculum", &self.curriculum), ("faq", &self.faq)]
            .into_iter()
            .flat_map(|(section, entries)| {
                entries.iter().enumerate().flat_map(move |(i, entry)| {
                    [
                        (format!("{}[{}].title", section, i), &entry.title),
                        (format!("{}[{}].body", section, i), &entry.body),
                    ]
                })
            });

        for (key, text) in keyed.chain(entries) {
            for lang in Lang::ALL {
                if text.get(lang).trim().is_empty() {
                    return Err(ContentError::MissingTranslation {
                        key,
                        lang: lang.code(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Look up a keyed string. Unknown keys render as the key itself.
    pub fn text<'a>(&'a self, key: &'a str, lang: Lang) -> &'a str {
        match self.strings.get(key) {
            Some(text) => text.get(lang),
            None => {
                log::warn!("No copy for `{}`", key);
                key
            }
        }
    }
}
