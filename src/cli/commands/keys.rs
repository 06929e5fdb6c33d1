use std::collections::BTreeSet;

use anyhow::Result;

use super::{CommandResult, CommandSummary, KeysSummary, helper::CommandContext};
use crate::cli::args::KeysCommand;

/// List every key known to any table, with the text the active language
/// would display for it.
pub fn keys(cmd: KeysCommand) -> Result<CommandResult> {
    let ctx = CommandContext::load(&cmd.common)?;
    let localizer = match &cmd.lang {
        Some(language) => ctx.localizer_in(language)?,
        None => ctx.localizer()?,
    };

    let all_keys: BTreeSet<&String> = ctx
        .scan
        .tables
        .values()
        .flat_map(|table| table.entries.keys())
        .collect();

    let entries = all_keys
        .into_iter()
        .map(|key| (key.clone(), localizer.resolve(key)))
        .collect();

    Ok(CommandResult::new(CommandSummary::Keys(KeysSummary {
        language: localizer.active_language().to_string(),
        entries,
    })))
}
