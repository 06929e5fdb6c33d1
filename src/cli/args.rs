//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `resolve`: Print the text for a key in the active language
//! - `language`: Show the active language (and list loaded ones)
//! - `use`: Switch to a language and remember the choice
//! - `toggle`: Switch to the next loaded language
//! - `keys`: List every key with its resolved text
//! - `check`: Report translation coverage issues
//! - `init`: Initialize lokal configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::issues::Rule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Take the command, or print help and return None when there is none.
    pub fn command_or_help(self) -> Option<Command> {
        if self.command.is_none() {
            Self::command().print_help().ok();
        }
        self.command
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.common().is_some_and(|common| common.verbose)
    }

    pub fn common(&self) -> Option<&CommonArgs> {
        match &self.command {
            Some(Command::Resolve(cmd)) => Some(&cmd.common),
            Some(Command::Language(cmd)) => Some(&cmd.common),
            Some(Command::Use(cmd)) => Some(&cmd.common),
            Some(Command::Toggle(cmd)) => Some(&cmd.common),
            Some(Command::Keys(cmd)) => Some(&cmd.common),
            Some(Command::Check(cmd)) => Some(&cmd.common),
            Some(Command::Init) | None => None,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Translation files directory (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Language used when no choice has been saved (overrides config file)
    #[arg(long)]
    pub default_language: Option<String>,

    /// Language consulted when a key is missing (overrides config file)
    #[arg(long)]
    pub fallback_language: Option<String>,

    /// Preference file that remembers the chosen language
    #[arg(long, env = "LOKAL_STORE")]
    pub store: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Dotted key, e.g. `pricing.cards.website.title`
    pub key: String,

    /// Interpolation value, `name=value`; repeatable
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_variable)]
    pub vars: Vec<(String, String)>,

    /// Resolve in this language for this run only (not saved)
    #[arg(long)]
    pub lang: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LanguageCommand {
    /// List every loaded language
    #[arg(long)]
    pub list: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct UseCommand {
    /// Language code, e.g. `en` or `mn`
    pub language: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ToggleCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    /// List in this language for this run only (not saved)
    #[arg(long)]
    pub lang: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    MissingTranslation,
    OrphanKey,
    Untranslated,
    PlaceholderMismatch,
    InvalidValue,
}

impl From<CheckRule> for Rule {
    fn from(rule: CheckRule) -> Self {
        match rule {
            CheckRule::MissingTranslation => Rule::MissingTranslation,
            CheckRule::OrphanKey => Rule::OrphanKey,
            CheckRule::Untranslated => Rule::Untranslated,
            CheckRule::PlaceholderMismatch => Rule::PlaceholderMismatch,
            CheckRule::InvalidValue => Rule::InvalidValue,
        }
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the text for a key in the active language
    Resolve(ResolveCommand),
    /// Show the active language
    #[command(alias = "lang")]
    Language(LanguageCommand),
    /// Switch to a language and remember the choice
    Use(UseCommand),
    /// Switch to the next loaded language and remember the choice
    Toggle(ToggleCommand),
    /// List every key with its text in the active language
    Keys(KeysCommand),
    /// Check translation coverage (missing, orphan, untranslated, placeholders)
    Check(CheckCommand),
    /// Initialize a new .lokalrc.json configuration file
    Init,
}

fn parse_variable(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got `{raw}`")),
    }
}
