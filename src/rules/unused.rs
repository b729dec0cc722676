//! Unused localized string detection rule.
//!
//! Detects keys declared in strings files but never referenced from source
//! or interface files.

use crate::{
    core::{CheckContext, DeclarationIndex, UsageIndex},
    issues::UnusedKeyIssue,
};

pub fn check_unused_keys_issues(ctx: &CheckContext) -> Vec<UnusedKeyIssue> {
    check_unused_keys(&ctx.declarations.index, &ctx.usages.index)
}

/// Check for unused keys.
///
/// Every declaration of an unused key is kept so each language can be
/// reported. Issues come out sorted by key.
pub fn check_unused_keys(
    declarations: &DeclarationIndex,
    usages: &UsageIndex,
) -> Vec<UnusedKeyIssue> {
    declarations
        .iter()
        .filter(|(key, _)| !usages.contains_key(*key))
        .map(|(key, occurrences)| UnusedKeyIssue {
            key: key.clone(),
            declarations: occurrences.clone(),
        })
        .collect()
}
