use crate::{
    cli::exit_status::ExitStatus,
    core::InvalidLanguageError,
    issues::{Issue, Report, Severity},
};

#[derive(Debug)]
pub enum CommandSummary {
    Resolve(ResolveSummary),
    Language(LanguageSummary),
    Switch(SwitchSummary),
    Rejected(InvalidLanguageError),
    Keys(KeysSummary),
    Check(CheckSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ResolveSummary {
    pub text: String,
}

#[derive(Debug)]
pub struct LanguageSummary {
    pub active: String,
    pub fallback: String,
    pub languages: Vec<String>,
    /// Print every language rather than only the active one.
    pub list: bool,
}

#[derive(Debug)]
pub struct SwitchSummary {
    pub from: String,
    pub to: String,
}

#[derive(Debug)]
pub struct KeysSummary {
    pub language: String,
    /// `(key, resolved text)` pairs, sorted by key.
    pub entries: Vec<(String, String)>,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub locale_files_checked: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running lokal commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of translation files that failed to parse.
    pub parse_error_count: usize,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self {
            summary,
            issues: Vec::new(),
            parse_error_count: 0,
        }
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.report_severity() == severity)
            .count()
    }

    pub fn exit_status(&self) -> ExitStatus {
        let failed = match &self.summary {
            CommandSummary::Rejected(_) => true,
            CommandSummary::Init(summary) => !summary.created,
            _ => self.error_count() > 0,
        };
        if failed {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
