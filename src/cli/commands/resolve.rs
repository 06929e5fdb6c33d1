use anyhow::Result;

use super::{CommandResult, CommandSummary, ResolveSummary, helper::CommandContext};
use crate::{cli::args::ResolveCommand, core::Variables};

pub fn resolve(cmd: ResolveCommand) -> Result<CommandResult> {
    let ctx = CommandContext::load(&cmd.common)?;
    let localizer = match &cmd.lang {
        Some(language) => ctx.localizer_in(language)?,
        None => ctx.localizer()?,
    };

    let variables: Variables = cmd.vars.into_iter().collect();
    let text = localizer.resolve_with(&cmd.key, &variables);

    Ok(CommandResult::new(CommandSummary::Resolve(ResolveSummary {
        text,
    })))
}
