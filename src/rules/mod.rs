//! Translation coverage rules.
//!
//! Every rule compares the non-fallback tables against the fallback table,
//! since that is the text users see whenever a key is missing.

use std::collections::BTreeMap;

use crate::core::{LanguageCode, parsers::json::ParsedTable};

pub mod invalid;
pub mod missing;
pub mod orphan;
pub mod placeholder;
pub mod untranslated;

/// Inputs shared by all rules.
pub struct CoverageContext<'a> {
    pub fallback: &'a LanguageCode,
    pub tables: &'a BTreeMap<LanguageCode, ParsedTable>,
    /// Keys exempt from the untranslated rule.
    pub ignore_untranslated: &'a [String],
}

impl<'a> CoverageContext<'a> {
    pub fn fallback_table(&self) -> Option<&'a ParsedTable> {
        self.tables.get(self.fallback)
    }

    /// Tables other than the fallback one, in language order.
    pub fn replicas(&self) -> impl Iterator<Item = (&'a LanguageCode, &'a ParsedTable)> + '_ {
        self.tables
            .iter()
            .filter(move |(language, _)| *language != self.fallback)
    }
}
