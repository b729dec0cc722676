use std::path::Path;

use anyhow::Result;

use super::{CommandResult, IndexSummary};
use crate::{
    cli::args::Arguments,
    core::{CheckContext, collect::RedefinitionError},
    issues::{Issue, RedefinedKeyIssue},
    rules::{
        check_mismatched_parameters_issues, check_missing_keys_issues, check_unused_keys_issues,
    },
};

/// Run every rule against the project at `root_dir`.
///
/// A redefined key ends the run with a single error issue; any other
/// failure is returned as an error.
pub fn check(args: &Arguments, root_dir: &Path) -> Result<CommandResult> {
    let ctx = match CheckContext::new(args, root_dir) {
        Ok(ctx) => ctx,
        Err(err) => {
            let redefinition = err.downcast::<RedefinitionError>()?;
            let issue = Issue::RedefinedKey(RedefinedKeyIssue::from(redefinition));
            return Ok(CommandResult::new(vec![issue], None, None, Vec::new()));
        }
    };

    let mut issues: Vec<Issue> = Vec::new();
    issues.extend(
        check_unused_keys_issues(&ctx)
            .into_iter()
            .map(Issue::UnusedKey),
    );
    issues.extend(
        check_missing_keys_issues(&ctx)
            .into_iter()
            .map(Issue::MissingKey),
    );
    issues.extend(
        check_mismatched_parameters_issues(&ctx)
            .into_iter()
            .map(Issue::MismatchedParameters),
    );

    let declarations = IndexSummary {
        key_count: ctx.declarations.index.len(),
        file_count: ctx.declarations.file_count,
    };
    let usages = IndexSummary {
        key_count: ctx.usages.index.len(),
        file_count: ctx.usages.file_count,
    };
    let read_warnings = ctx.read_warnings().cloned().collect();

    Ok(CommandResult::new(
        issues,
        Some(declarations),
        Some(usages),
        read_warnings,
    ))
}
