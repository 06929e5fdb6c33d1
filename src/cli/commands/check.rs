use std::collections::HashSet;

use anyhow::Result;
use clap::ValueEnum;

use super::{CheckSummary, CommandResult, CommandSummary, helper::CommandContext};
use crate::{
    cli::args::{CheckCommand, CheckRule},
    issues::{Issue, ParseErrorIssue, Rule},
    rules::{
        CoverageContext, invalid::check_invalid_values, missing::check_missing_translations,
        orphan::check_orphan_keys, placeholder::check_placeholder_mismatches,
        untranslated::check_untranslated,
    },
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CommandContext::load(&cmd.common)?;
    let rules: HashSet<Rule> = if cmd.checks.is_empty() {
        CheckRule::value_variants().iter().copied().map(Rule::from).collect()
    } else {
        cmd.checks.iter().copied().map(Rule::from).collect()
    };

    let coverage = CoverageContext {
        fallback: &ctx.fallback_language,
        tables: &ctx.scan.tables,
        ignore_untranslated: &ctx.config.ignore_untranslated,
    };
    let mut issues = run_rules(&coverage, &rules);

    // Parse errors are reported whatever rules were selected
    issues.extend(ctx.scan.warnings.iter().map(|warning| {
        Issue::from(ParseErrorIssue {
            file_path: warning.file_path.clone(),
            error: warning.error.clone(),
        })
    }));

    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary {
            locale_files_checked: ctx.scan.tables.len(),
        }),
        issues,
        parse_error_count: ctx.scan.warnings.len(),
    })
}

pub fn run_rules(ctx: &CoverageContext, rules: &HashSet<Rule>) -> Vec<Issue> {
    let mut issues = Vec::new();

    if rules.contains(&Rule::MissingTranslation) {
        issues.extend(check_missing_translations(ctx).into_iter().map(Issue::from));
    }
    if rules.contains(&Rule::OrphanKey) {
        issues.extend(check_orphan_keys(ctx).into_iter().map(Issue::from));
    }
    if rules.contains(&Rule::Untranslated) {
        issues.extend(check_untranslated(ctx).into_iter().map(Issue::from));
    }
    if rules.contains(&Rule::PlaceholderMismatch) {
        issues.extend(check_placeholder_mismatches(ctx).into_iter().map(Issue::from));
    }
    if rules.contains(&Rule::InvalidValue) {
        issues.extend(check_invalid_values(ctx).into_iter().map(Issue::from));
    }

    issues
}
