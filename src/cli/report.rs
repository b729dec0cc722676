//! Report formatting and printing utilities.
//!
//! Diagnostics are printed one per line as `<path>:<line>: <severity>: <message>`,
//! the format Xcode and most editors pick up as clickable warnings. Separate
//! from core logic to allow locstrings to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, IndexSummary};
use crate::issues::{Diagnostic, Issue, Report, Rule, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a check result to stdout, and the read warning count to stderr.
pub fn print(result: &CommandResult, grouped: bool, verbose: bool) {
    report_to(result, grouped, &mut io::stdout().lock());
    print_read_warning_to(result.read_warnings.len(), verbose, &mut io::stderr().lock());
}

/// Print a check result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(result: &CommandResult, grouped: bool, writer: &mut W) {
    if let Some(summary) = result.declarations {
        print_index_summary(writer, "defined", summary);
    }
    if let Some(summary) = result.usages {
        print_index_summary(writer, "used", summary);
    }

    let mut current_section: Option<Rule> = None;
    for issue in &result.issues {
        let rule = issue.report_rule();
        if current_section != Some(rule) {
            if let Some(header) = section_header(rule) {
                let _ = writeln!(writer, "\n{}", header);
            }
            current_section = Some(rule);
        }
        print_issue(issue, grouped, writer);
    }

    print_summary(result, writer);
}

/// Print a warning about files that could not be read.
pub fn print_read_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

/// Format one diagnostic line. Missing parts leave their field empty.
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    let severity = match diagnostic.severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };
    let line = diagnostic
        .line
        .map(|line| line.to_string())
        .unwrap_or_default();

    format!(
        "{}:{}: {}: {}",
        diagnostic.file_path, line, severity, diagnostic.message
    )
}

// ============================================================
// Internal Functions
// ============================================================

fn section_header(rule: Rule) -> Option<&'static str> {
    match rule {
        Rule::RedefinedKey => None,
        Rule::UnusedKey => Some("--------- Unused strings ---------"),
        Rule::MissingKey => Some("--------- Missing strings ---------"),
        Rule::MismatchedParameters => Some("--------- Mismatched parameters ---------"),
    }
}

fn print_index_summary<W: Write>(writer: &mut W, kind: &str, summary: IndexSummary) {
    let _ = writeln!(
        writer,
        "Found {} {} string keys in {} files",
        summary.key_count, kind, summary.file_count
    );
}

fn print_issue<W: Write>(issue: &Issue, grouped: bool, writer: &mut W) {
    let diagnostics = if grouped {
        issue.grouped_diagnostics()
    } else {
        issue.diagnostics()
    };
    for diagnostic in &diagnostics {
        let _ = writeln!(writer, "{}", format_diagnostic(diagnostic));
    }
}

fn print_summary<W: Write>(result: &CommandResult, writer: &mut W) {
    let total_problems = result.error_count + result.warning_count;

    if total_problems == 0 {
        let _ = writeln!(
            writer,
            "\n{} {}",
            SUCCESS_MARK.green(),
            "No localization issues found".green()
        );
        return;
    }

    let _ = writeln!(
        writer,
        "\n{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        total_problems,
        if total_problems == 1 {
            "problem"
        } else {
            "problems"
        },
        result.error_count,
        if result.error_count == 1 {
            "error"
        } else {
            "errors"
        }
        .red(),
        result.warning_count,
        if result.warning_count == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}
