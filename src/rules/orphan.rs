//! Orphan key detection rule.
//!
//! Detects keys present in a language but absent from the fallback table.
//! They resolve while that language is active and show as raw keys in the
//! fallback language.

use crate::{issues::OrphanKeyIssue, rules::CoverageContext};

pub fn check_orphan_keys(ctx: &CoverageContext) -> Vec<OrphanKeyIssue> {
    let Some(fallback) = ctx.fallback_table() else {
        return Vec::new();
    };

    ctx.replicas()
        .flat_map(move |(language, table)| {
            table
                .entries
                .iter()
                .filter(move |(key, _)| !fallback.contains_key(key))
                .map(move |(_, entry)| OrphanKeyIssue {
                    context: entry.clone(),
                    language: language.to_string(),
                })
        })
        .collect()
}
