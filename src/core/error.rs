use std::path::PathBuf;

use thiserror::Error;

use super::language::LanguageCode;

/// A string that cannot be used as a language code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageCodeError {
    #[error("language code is empty")]
    Empty,

    #[error("malformed language code `{0}` (expected subtags like `en` or `pt-br`)")]
    Malformed(String),
}

/// Requested language has no loaded translation table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language `{requested}` (available: {})", join_codes(.available))]
pub struct InvalidLanguageError {
    pub requested: String,
    pub available: Vec<LanguageCode>,
}

fn join_codes(codes: &[LanguageCode]) -> String {
    codes
        .iter()
        .map(LanguageCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure reading or writing a [`PreferenceStore`](super::store::PreferenceStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access preference file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("preference file {path:?} is not a JSON object")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("preference store lock was poisoned")]
    Poisoned,
}

/// Errors building a [`Localizer`](super::resolver::Localizer).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocalizeError {
    #[error(transparent)]
    InvalidLanguage(#[from] InvalidLanguageError),

    #[error("fallback language `{0}` has no translation table")]
    UnknownFallback(LanguageCode),
}
