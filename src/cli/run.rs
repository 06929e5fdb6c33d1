//! Dispatches parsed arguments to the matching command handler.

use anyhow::Result;

use super::{
    args::Command,
    commands::{
        CommandResult,
        check::check,
        init::init,
        keys::keys,
        language::{language, toggle, use_language},
        resolve::resolve,
    },
};

pub fn run(command: Command) -> Result<CommandResult> {
    match command {
        Command::Resolve(cmd) => resolve(cmd),
        Command::Language(cmd) => language(cmd),
        Command::Use(cmd) => use_language(cmd),
        Command::Toggle(cmd) => toggle(cmd),
        Command::Keys(cmd) => keys(cmd),
        Command::Check(cmd) => check(cmd),
        Command::Init => init(),
    }
}
