//! Untranslated value detection rule.
//!
//! Detects values identical to the fallback text, which usually means the
//! copy was pasted in and never translated. Values without letters
//! (`24/7`, `60%`) and ignored keys are skipped.

use crate::{issues::UntranslatedIssue, rules::CoverageContext, utils::contains_alphabetic};

pub fn check_untranslated(ctx: &CoverageContext) -> Vec<UntranslatedIssue> {
    let Some(fallback) = ctx.fallback_table() else {
        return Vec::new();
    };

    fallback
        .entries
        .iter()
        .filter(|(key, entry)| {
            contains_alphabetic(&entry.value) && !ctx.ignore_untranslated.contains(*key)
        })
        .filter_map(|(key, entry)| {
            let identical_in: Vec<String> = ctx
                .replicas()
                .filter(|(_, table)| {
                    table
                        .get(key)
                        .is_some_and(|replica| replica.value == entry.value)
                })
                .map(|(language, _)| language.to_string())
                .collect();

            if identical_in.is_empty() {
                None
            } else {
                Some(UntranslatedIssue {
                    context: entry.clone(),
                    fallback_language: ctx.fallback.to_string(),
                    identical_in,
                })
            }
        })
        .collect()
}
