//! Issue types for localization analysis results.
//!
//! Each issue is self-contained with all information the reporter needs to
//! render it: the key, every location involved, and the languages concerned.

use enum_dispatch::enum_dispatch;

use crate::core::{
    Occurrence, collect::RedefinitionError, extract::format_specifiers, language_for_path,
};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
///
/// The declaration order is the order of report sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    RedefinedKey,
    UnusedKey,
    MissingKey,
    MismatchedParameters,
}

// ============================================================
// Issue Types
// ============================================================

/// Key declared twice in one strings file. Stops the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedefinedKeyIssue {
    pub key: String,
    pub file_path: String,
    /// Line of the second declaration.
    pub line: usize,
    pub language: String,
}

impl RedefinedKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::RedefinedKey
    }
}

impl From<RedefinitionError> for RedefinedKeyIssue {
    fn from(err: RedefinitionError) -> Self {
        Self {
            key: err.key,
            file_path: err.file_path,
            line: err.line,
            language: err.language,
        }
    }
}

/// Key declared in strings files but never referenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedKeyIssue {
    pub key: String,
    /// Every declaration of the key, one per strings file.
    pub declarations: Vec<Occurrence>,
}

impl UnusedKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnusedKey
    }
}

/// A language a key has no translation in, with the strings file for it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MissingLanguage {
    pub language: String,
    pub file_path: String,
}

impl MissingLanguage {
    pub fn new(language: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            file_path: file_path.into(),
        }
    }
}

/// Key referenced or declared, but without a translation in some languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyIssue {
    pub key: String,
    /// Languages without a translation, sorted.
    pub missing_in: Vec<MissingLanguage>,
    /// Sites that reference the key (empty for keys that are only declared).
    pub usages: Vec<Occurrence>,
}

impl MissingKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MissingKey
    }

    fn languages(&self) -> String {
        self.missing_in
            .iter()
            .map(|m| m.language.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Key whose format specifiers differ between languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchedParametersIssue {
    pub key: String,
    /// Every declaration of the key, one per strings file.
    pub declarations: Vec<Occurrence>,
}

impl MismatchedParametersIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MismatchedParameters
    }

    /// `en: %@; fr: none` style summary of each language's specifiers.
    fn specifier_summary(&self) -> String {
        self.declarations
            .iter()
            .map(|d| {
                let specifiers = format_specifiers(&d.value);
                let specifiers = if specifiers.is_empty() {
                    "none".to_string()
                } else {
                    specifiers.join(" ")
                };
                format!("{}: {}", language_or_path(&d.file_path), specifiers)
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A localization issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    RedefinedKey(RedefinedKeyIssue),
    UnusedKey(UnusedKeyIssue),
    MissingKey(MissingKeyIssue),
    MismatchedParameters(MismatchedParametersIssue),
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// One rendered diagnostic line: `<path>:<line>: <severity>: <message>`.
///
/// `file_path` is empty and `line` is `None` for findings that span
/// several files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file_path: String,
    pub line: Option<usize>,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        file_path: impl Into<String>,
        line: Option<usize>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            severity,
            message: message.into(),
        }
    }
}

/// Trait for types that can be reported to the CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// The localization key this issue is about.
    fn key(&self) -> &str;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// One diagnostic per location involved.
    fn diagnostics(&self) -> Vec<Diagnostic>;

    /// Diagnostics with multi-language findings folded into one line.
    fn grouped_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics()
    }
}

fn language_or_path(file_path: &str) -> String {
    language_for_path(file_path).unwrap_or_else(|| file_path.to_string())
}

fn sorted_languages(occurrences: &[Occurrence]) -> String {
    let mut languages: Vec<String> = occurrences
        .iter()
        .filter_map(|o| language_for_path(&o.file_path))
        .collect();
    languages.sort();
    languages.join(", ")
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for RedefinedKeyIssue {
    fn key(&self) -> &str {
        &self.key
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn diagnostics(&self) -> Vec<Diagnostic> {
        vec![Diagnostic::new(
            &self.file_path,
            Some(self.line),
            Self::severity(),
            format!("Redefined key {} in file: {}", self.key, self.language),
        )]
    }
}

impl Report for UnusedKeyIssue {
    fn key(&self) -> &str {
        &self.key
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn diagnostics(&self) -> Vec<Diagnostic> {
        self.declarations
            .iter()
            .map(|d| {
                Diagnostic::new(
                    &d.file_path,
                    Some(d.line),
                    Self::severity(),
                    format!(
                        "Unused localized string {} in {}",
                        self.key,
                        language_for_path(&d.file_path).unwrap_or_default()
                    ),
                )
            })
            .collect()
    }

    fn grouped_diagnostics(&self) -> Vec<Diagnostic> {
        if self.declarations.len() <= 1 {
            return self.diagnostics();
        }
        vec![Diagnostic::new(
            "",
            None,
            Self::severity(),
            format!(
                "Unused localized string {} for languages ({})",
                self.key,
                sorted_languages(&self.declarations)
            ),
        )]
    }
}

impl Report for MissingKeyIssue {
    fn key(&self) -> &str {
        &self.key
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn diagnostics(&self) -> Vec<Diagnostic> {
        if self.usages.is_empty() {
            return self
                .missing_in
                .iter()
                .map(|m| {
                    Diagnostic::new(
                        &m.file_path,
                        None,
                        Self::severity(),
                        format!("Missing localized string {} in {}", self.key, m.language),
                    )
                })
                .collect();
        }

        let message = match self.missing_in.as_slice() {
            [single] => format!("Missing localized string {} in {}", self.key, single.language),
            _ => format!(
                "Missing localized string {} for languages ({})",
                self.key,
                self.languages()
            ),
        };
        self.usages
            .iter()
            .map(|u| Diagnostic::new(&u.file_path, Some(u.line), Self::severity(), &message))
            .collect()
    }

    fn grouped_diagnostics(&self) -> Vec<Diagnostic> {
        match self.missing_in.as_slice() {
            [single] => vec![Diagnostic::new(
                &single.file_path,
                None,
                Self::severity(),
                format!("Missing localized string {} in {}", self.key, single.language),
            )],
            _ => vec![Diagnostic::new(
                "",
                None,
                Self::severity(),
                format!(
                    "Missing localized string {} for languages ({})",
                    self.key,
                    self.languages()
                ),
            )],
        }
    }
}

impl Report for MismatchedParametersIssue {
    fn key(&self) -> &str {
        &self.key
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn diagnostics(&self) -> Vec<Diagnostic> {
        let message = format!(
            "Parameter mismatch between languages for key {} ({})",
            self.key,
            self.specifier_summary()
        );
        self.declarations
            .iter()
            .map(|d| Diagnostic::new(&d.file_path, Some(d.line), Self::severity(), &message))
            .collect()
    }

    fn grouped_diagnostics(&self) -> Vec<Diagnostic> {
        vec![Diagnostic::new(
            "",
            None,
            Self::severity(),
            format!("Parameter mismatch between languages for key {}", self.key),
        )]
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.report_rule()
            .cmp(&other.report_rule())
            .then_with(|| self.key().cmp(other.key()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
