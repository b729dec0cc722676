use crate::{
    core::collect::FileReadWarning,
    issues::{Issue, Report, Severity},
};

/// Key and file counts for one index, printed as a summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSummary {
    pub key_count: usize,
    pub file_count: usize,
}

/// Result of running a check.
#[derive(Debug)]
pub struct CommandResult {
    /// All issues found, sorted by rule then key.
    pub issues: Vec<Issue>,
    pub error_count: usize,
    pub warning_count: usize,
    /// `None` when the run stopped before the declaration index was complete.
    pub declarations: Option<IndexSummary>,
    pub usages: Option<IndexSummary>,
    /// Files that could not be read.
    pub read_warnings: Vec<FileReadWarning>,
}

impl CommandResult {
    pub fn new(
        mut issues: Vec<Issue>,
        declarations: Option<IndexSummary>,
        usages: Option<IndexSummary>,
        read_warnings: Vec<FileReadWarning>,
    ) -> Self {
        issues.sort();

        let error_count = issues
            .iter()
            .filter(|i| i.report_severity() == Severity::Error)
            .count();
        let warning_count = issues.len() - error_count;

        Self {
            issues,
            error_count,
            warning_count,
            declarations,
            usages,
            read_warnings,
        }
    }
}
