//! Placeholder mismatch detection rule.
//!
//! A translation must use the same `{{name}}` placeholders as the fallback
//! text; otherwise callers' values are dropped or markers stay visible.

use crate::{core::placeholders, issues::PlaceholderMismatchIssue, rules::CoverageContext};

pub fn check_placeholder_mismatches(ctx: &CoverageContext) -> Vec<PlaceholderMismatchIssue> {
    let Some(fallback) = ctx.fallback_table() else {
        return Vec::new();
    };

    ctx.replicas()
        .flat_map(move |(language, table)| {
            table.entries.iter().filter_map(move |(key, entry)| {
                let expected = placeholders(&fallback.get(key)?.value);
                let found = placeholders(&entry.value);
                if expected == found {
                    return None;
                }
                Some(PlaceholderMismatchIssue {
                    context: entry.clone(),
                    language: language.to_string(),
                    expected: expected.into_iter().map(String::from).collect(),
                    found: found.into_iter().map(String::from).collect(),
                })
            })
        })
        .collect()
}
