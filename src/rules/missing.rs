//! Missing localized string detection rule.
//!
//! Runs over every key in either index. A key is missing in each language of
//! the project that has no declaration for it, so a key that is used but
//! never declared is missing everywhere.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    core::{CheckContext, DeclarationIndex, Languages, UsageIndex, language_for_path},
    issues::{MissingKeyIssue, MissingLanguage},
};

pub fn check_missing_keys_issues(ctx: &CheckContext) -> Vec<MissingKeyIssue> {
    check_missing_keys(
        &ctx.declarations.index,
        &ctx.usages.index,
        &ctx.declarations.languages,
    )
}

/// Map each key to the languages it has no declaration in.
///
/// Keys translated in every language are left out.
pub fn find_missing_languages(
    declarations: &DeclarationIndex,
    usages: &UsageIndex,
    languages: &Languages,
) -> BTreeMap<String, BTreeSet<String>> {
    let keys: BTreeSet<&String> = declarations.keys().chain(usages.keys()).collect();

    keys.into_iter()
        .filter_map(|key| {
            let present: BTreeSet<String> = declarations
                .get(key)
                .into_iter()
                .flatten()
                .filter_map(|o| language_for_path(&o.file_path))
                .collect();
            let missing = languages.missing_from(&present);
            (!missing.is_empty()).then(|| (key.clone(), missing))
        })
        .collect()
}

/// Check for missing keys.
///
/// Each issue carries the usage sites of the key and, per missing language,
/// the strings file the translation belongs in.
pub fn check_missing_keys(
    declarations: &DeclarationIndex,
    usages: &UsageIndex,
    languages: &Languages,
) -> Vec<MissingKeyIssue> {
    find_missing_languages(declarations, usages, languages)
        .into_iter()
        .map(|(key, missing)| {
            let missing_in = missing
                .into_iter()
                .map(|language| {
                    let file_path = languages.file_for(&language).unwrap_or_default();
                    MissingLanguage::new(language, file_path)
                })
                .collect();
            MissingKeyIssue {
                usages: usages.get(&key).cloned().unwrap_or_default(),
                key,
                missing_in,
            }
        })
        .collect()
}
