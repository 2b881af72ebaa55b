use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DockError {
    /// A required element is not on the page. The dock simply stays off.
    #[error("element #{id} not found, scroll dock inactive")]
    MissingElement { id: &'static str },
    #[error("failed to subscribe to {0}")]
    Subscribe(String),
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("page content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("content entry `{key}` is missing its {lang} text")]
    MissingTranslation { key: String, lang: &'static str },
}
