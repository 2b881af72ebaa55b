use std::rc::Rc;

use web_sys::window;
use yew::Callback;

use crate::config;
use crate::content::Content;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Ar,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    /// Anything we don't recognise falls back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "ar" => Lang::Ar,
            _ => Lang::En,
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Lang::Ar => "rtl",
            Lang::En => "ltr",
        }
    }

    /// Label shown on the language button, always in its own language.
    pub fn label(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Ar => "العربية",
        }
    }

    pub fn logo_src(self) -> &'static str {
        match self {
            Lang::Ar => config::LOGO_LIGHT,
            Lang::En => config::LOGO_DARK,
        }
    }
}

pub fn stored_lang() -> Lang {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(config::LANG_STORAGE_KEY).ok())
        .flatten()
        .map(|code| Lang::from_code(&code))
        .unwrap_or_default()
}

/// Point `<html>` at the language and remember the choice.
pub fn apply_lang(lang: Lang) {
    if let Some(window) = window() {
        if let Some(root) = window.document().and_then(|d| d.document_element()) {
            let _ = root.set_attribute("dir", lang.dir());
            let _ = root.set_attribute("lang", lang.code());
        }
        if let Ok(Some(storage)) = window.local_storage() {
            if let Err(e) = storage.set_item(config::LANG_STORAGE_KEY, lang.code()) {
                log::warn!("Could not save language preference: {:?}", e);
            }
        }
    }
}

/// Shared with every component through a `ContextProvider`.
#[derive(Clone, PartialEq)]
pub struct PageContext {
    pub lang: Lang,
    pub content: Rc<Content>,
    pub set_lang: Callback<Lang>,
}

impl PageContext {
    pub fn t(&self, key: &str) -> String {
        self.content.text(key, self.lang).to_string()
    }
}
