//! The localization resolver.
//!
//! A [`Localizer`] owns the active language, the fallback language and one
//! table per language, plus the [`PreferenceStore`] that
//! remembers the user's choice. Consumers borrow it; there is no global
//! instance.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::{
    error::{InvalidLanguageError, LocalizeError},
    interpolate::{Variables, interpolate},
    language::LanguageCode,
    store::{LANGUAGE_KEY, PreferenceStore},
    tree::TranslationTable,
};

/// Tables plus the active and fallback language.
#[derive(Debug, Clone)]
struct LocalizationState {
    active: LanguageCode,
    fallback: LanguageCode,
    tables: BTreeMap<LanguageCode, TranslationTable>,
}

impl LocalizationState {
    fn lookup(&self, language: &LanguageCode, key: &str) -> Option<&str> {
        self.tables.get(language)?.get(key)
    }

    fn check_language(&self, requested: &str) -> Result<LanguageCode, InvalidLanguageError> {
        LanguageCode::parse(requested)
            .ok()
            .filter(|code| self.tables.contains_key(code))
            .ok_or_else(|| InvalidLanguageError {
                requested: requested.to_string(),
                available: self.tables.keys().cloned().collect(),
            })
    }
}

pub struct Localizer<S> {
    state: LocalizationState,
    store: S,
}

impl<S: PreferenceStore> Localizer<S> {
    /// Build a localizer with an explicit initial language.
    ///
    /// Both `initial` and `fallback` must have a table in `tables`. Nothing is
    /// written to `store` until [`set_language`](Self::set_language).
    pub fn initialize(
        tables: impl IntoIterator<Item = TranslationTable>,
        initial: &LanguageCode,
        fallback: &LanguageCode,
        store: S,
    ) -> Result<Self, LocalizeError> {
        let tables: BTreeMap<_, _> = tables
            .into_iter()
            .map(|table| (table.language().clone(), table))
            .collect();

        if !tables.contains_key(fallback) {
            return Err(LocalizeError::UnknownFallback(fallback.clone()));
        }
        if !tables.contains_key(initial) {
            return Err(InvalidLanguageError {
                requested: initial.to_string(),
                available: tables.keys().cloned().collect(),
            }
            .into());
        }

        Ok(Self {
            state: LocalizationState {
                active: initial.clone(),
                fallback: fallback.clone(),
                tables,
            },
            store,
        })
    }

    /// Build a localizer whose initial language comes from `store`.
    ///
    /// The saved language wins when it names a loaded table. A read error or
    /// an unknown saved value counts as no preference, in which case
    /// `default` is used, or `fallback` when `default` has no table either.
    pub fn from_store(
        tables: impl IntoIterator<Item = TranslationTable>,
        default: &LanguageCode,
        fallback: &LanguageCode,
        store: S,
    ) -> Result<Self, LocalizeError> {
        let tables: Vec<_> = tables.into_iter().collect();
        let loaded = |code: &LanguageCode| tables.iter().any(|t| t.language() == code);

        let saved = match store.get(LANGUAGE_KEY) {
            Ok(saved) => saved,
            Err(e) => {
                warn!("could not read saved language, using default: {e}");
                None
            }
        };
        let saved = saved.and_then(|raw| match LanguageCode::parse(&raw) {
            Ok(code) if loaded(&code) => Some(code),
            _ => {
                debug!("ignoring saved language `{raw}`: no such table");
                None
            }
        });

        let initial = match saved {
            Some(code) => code,
            None if loaded(default) => default.clone(),
            None => {
                warn!("default language `{default}` has no table, starting in `{fallback}`");
                fallback.clone()
            }
        };

        Self::initialize(tables, &initial, fallback, store)
    }

    /// Resolve `key` without interpolation.
    pub fn resolve(&self, key: &str) -> String {
        self.resolve_with(key, &Variables::new())
    }

    /// Resolve `key` in the active language, then the fallback language.
    ///
    /// Returns `key` itself when neither table has a string at that path.
    pub fn resolve_with(&self, key: &str, variables: &Variables) -> String {
        match self.lookup(key) {
            Some(template) => interpolate(template, variables).into_owned(),
            None => key.to_string(),
        }
    }

    /// The raw template for `key`, after fallback.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let state = &self.state;
        if let Some(text) = state.lookup(&state.active, key) {
            return Some(text);
        }
        if state.active != state.fallback
            && let Some(text) = state.lookup(&state.fallback, key)
        {
            debug!(key, language = %state.active, "using fallback `{}`", state.fallback);
            return Some(text);
        }
        debug!(key, "missing in all tables");
        None
    }

    /// Switch the active language and persist it.
    ///
    /// Fails without touching any state when `requested` has no table. The
    /// persistence write is best-effort: a store error is logged and the
    /// switch still takes effect.
    pub fn set_language(&mut self, requested: &str) -> Result<(), InvalidLanguageError> {
        let code = self.state.check_language(requested)?;

        if code != self.state.active {
            debug!("language: {} -> {}", self.state.active, code);
        }
        if let Err(e) = self.store.set(LANGUAGE_KEY, code.as_str()) {
            warn!("could not save language `{code}`: {e}");
        }
        self.state.active = code;
        Ok(())
    }

    pub fn active_language(&self) -> &LanguageCode {
        &self.state.active
    }

    pub fn fallback_language(&self) -> &LanguageCode {
        &self.state.fallback
    }

    /// Loaded languages in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &LanguageCode> {
        self.state.tables.keys()
    }

    /// The language after the active one, wrapping around.
    pub fn next_language(&self) -> &LanguageCode {
        let tables = &self.state.tables;
        tables
            .range((
                std::ops::Bound::Excluded(&self.state.active),
                std::ops::Bound::Unbounded,
            ))
            .next()
            .or_else(|| tables.iter().next())
            .map(|(code, _)| code)
            .unwrap_or(&self.state.active)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
