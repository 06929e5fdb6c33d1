//! The language switcher: show, set and cycle the active language.
//!
//! All three go through the localizer, so `use` and `toggle` persist the
//! choice exactly as the resolver does.

use anyhow::Result;
use tracing::debug;

use super::{CommandResult, CommandSummary, LanguageSummary, SwitchSummary, helper::CommandContext};
use crate::{
    cli::args::{LanguageCommand, ToggleCommand, UseCommand},
    core::{FileStore, LanguageCode, Localizer},
};

pub fn language(cmd: LanguageCommand) -> Result<CommandResult> {
    let ctx = CommandContext::load(&cmd.common)?;
    let localizer = ctx.localizer()?;

    Ok(CommandResult::new(CommandSummary::Language(LanguageSummary {
        active: localizer.active_language().to_string(),
        fallback: localizer.fallback_language().to_string(),
        languages: localizer.languages().map(LanguageCode::to_string).collect(),
        list: cmd.list,
    })))
}

pub fn use_language(cmd: UseCommand) -> Result<CommandResult> {
    let ctx = CommandContext::load(&cmd.common)?;
    let mut localizer = ctx.localizer()?;
    Ok(switch(&mut localizer, &cmd.language))
}

pub fn toggle(cmd: ToggleCommand) -> Result<CommandResult> {
    let ctx = CommandContext::load(&cmd.common)?;
    let mut localizer = ctx.localizer()?;
    let next = localizer.next_language().to_string();
    Ok(switch(&mut localizer, &next))
}

fn switch(localizer: &mut Localizer<FileStore>, requested: &str) -> CommandResult {
    let from = localizer.active_language().to_string();

    let summary = match localizer.set_language(requested) {
        Ok(()) => {
            debug!("preference file: {:?}", localizer.store().path());
            CommandSummary::Switch(SwitchSummary {
                from,
                to: localizer.active_language().to_string(),
            })
        }
        Err(e) => CommandSummary::Rejected(e),
    };

    CommandResult::new(summary)
}
