//! Report formatting and printing utilities.
//!
//! Check results are displayed in cargo-style format. The other commands
//! print plain lines so their output can be piped.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, InitSummary, KeysSummary, LanguageSummary, SwitchSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::InvalidLanguageError;
use crate::issues::{Issue, Report, ReportLocation, Severity};
use crate::utils::plural;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(compare_issues);

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(locale_files: usize) {
    print_success_to(locale_files, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(locale_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} - no issues found",
            plural(locale_files, "locale file", "locale files")
        )
        .green()
    );
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line, col) = extract_location_info(&loc);

    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line:col
    if line > 0 {
        let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);
    } else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} ({}, {})",
            FAILURE_MARK.red(),
            plural(total_problems, "problem", "problems"),
            plural(total_errors, "error", "errors").red(),
            plural(total_warnings, "warning", "warnings").yellow()
        );
    }
}

fn extract_location_info<'a>(loc: &'a ReportLocation<'a>) -> (&'a str, usize, usize) {
    match loc {
        ReportLocation::Message(location) => (&location.file_path, location.line, location.col),
        ReportLocation::File { path } => (path, 0, 0),
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Message(location) => Some(location.line),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    let a_loc = a.location();
    let b_loc = b.location();
    let (a_path, a_line, a_col) = extract_location_info(&a_loc);
    let (b_path, b_line, b_col) = extract_location_info(&b_loc);

    a_path
        .cmp(b_path)
        .then_with(|| a_line.cmp(&b_line))
        .then_with(|| a_col.cmp(&b_col))
        .then_with(|| a.report_rule().cmp(&b.report_rule()))
}

// ============================================================
// Command Output
// ============================================================

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    print_to(result, verbose, &mut stdout, &mut stderr);
}

pub fn print_to<W: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    match &result.summary {
        CommandSummary::Resolve(summary) => {
            let _ = writeln!(out, "{}", summary.text);
        }
        CommandSummary::Language(summary) => print_language(summary, out),
        CommandSummary::Switch(summary) => print_switch(summary, out),
        CommandSummary::Rejected(error) => print_rejected(error, err),
        CommandSummary::Keys(summary) => print_keys(summary, out, err),
        CommandSummary::Check(summary) => {
            if result.issues.is_empty() {
                print_success_to(summary.locale_files_checked, out);
            } else {
                report_to(&result.issues, out);
            }
            print_parse_warning_to(result.parse_error_count, verbose, err);
        }
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

fn print_language<W: Write>(summary: &LanguageSummary, out: &mut W) {
    if !summary.list {
        let _ = writeln!(out, "{}", summary.active);
        return;
    }

    for language in &summary.languages {
        let marker = if *language == summary.active { "*" } else { " " };
        if *language == summary.fallback {
            let _ = writeln!(out, "{} {} {}", marker.green(), language, "(fallback)".dimmed());
        } else {
            let _ = writeln!(out, "{} {}", marker.green(), language);
        }
    }
}

fn print_switch<W: Write>(summary: &SwitchSummary, out: &mut W) {
    let _ = writeln!(
        out,
        "{} Switched language: {} -> {}",
        SUCCESS_MARK.green(),
        summary.from,
        summary.to.bold()
    );
}

fn print_rejected<E: Write>(error: &InvalidLanguageError, err: &mut E) {
    let _ = writeln!(err, "{} {}", "error:".bold().red(), error);
}

fn print_keys<W: Write, E: Write>(summary: &KeysSummary, out: &mut W, err: &mut E) {
    if summary.entries.is_empty() {
        let _ = writeln!(
            err,
            "{} no keys to show for {}",
            "warning:".bold().yellow(),
            summary.language
        );
    }
    for (key, text) in &summary.entries {
        let _ = writeln!(out, "{} = {}", key.cyan(), text);
    }
}

fn print_init<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            err,
            "{} {} already exists",
            "error:".bold().red(),
            CONFIG_FILE_NAME
        );
    }
}

// ============================================================
// Tests
// ============================================================
