//! Missing translation detection rule.
//!
//! Detects keys that exist in the fallback table but are missing in one or
//! more other languages.

use crate::{issues::MissingTranslationIssue, rules::CoverageContext};

pub fn check_missing_translations(ctx: &CoverageContext) -> Vec<MissingTranslationIssue> {
    let Some(fallback) = ctx.fallback_table() else {
        return Vec::new();
    };

    fallback
        .entries
        .iter()
        .filter_map(|(key, entry)| {
            let missing_in: Vec<String> = ctx
                .replicas()
                .filter(|(_, table)| !table.contains_key(key))
                .map(|(language, _)| language.to_string())
                .collect();

            if missing_in.is_empty() {
                None
            } else {
                Some(MissingTranslationIssue {
                    context: entry.clone(),
                    fallback_language: ctx.fallback.to_string(),
                    missing_in,
                })
            }
        })
        .collect()
}
