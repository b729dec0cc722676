//! Mismatched format parameter detection rule.
//!
//! Compares the printf-style specifiers of every translation of a key. Order
//! matters: `%1$@ %2$d` and `%2$d %1$@` do not match.

use std::collections::BTreeSet;

use crate::{
    core::{CheckContext, DeclarationIndex, extract::specifiers_match},
    issues::MismatchedParametersIssue,
};

pub fn check_mismatched_parameters_issues(ctx: &CheckContext) -> Vec<MismatchedParametersIssue> {
    check_mismatched_parameters(&ctx.declarations.index)
}

/// Keys whose translations disagree on format specifiers.
///
/// Only keys with two or more declarations are compared, pairwise in index
/// order. The first disagreeing pair flags the key.
pub fn find_mismatched_keys(declarations: &DeclarationIndex) -> BTreeSet<String> {
    declarations
        .iter()
        .filter(|(_, occurrences)| {
            occurrences
                .windows(2)
                .any(|pair| !specifiers_match(&pair[0].value, &pair[1].value))
        })
        .map(|(key, _)| key.clone())
        .collect()
}

pub fn check_mismatched_parameters(
    declarations: &DeclarationIndex,
) -> Vec<MismatchedParametersIssue> {
    find_mismatched_keys(declarations)
        .into_iter()
        .map(|key| MismatchedParametersIssue {
            declarations: declarations.get(&key).cloned().unwrap_or_default(),
            key,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::Occurrence;
    use crate::rules::mismatched::*;

    const EN: &str = "App/en.lproj/Localizable.strings";
    const FR: &str = "App/fr.lproj/Localizable.strings";
    const DE: &str = "App/de.lproj/Localizable.strings";

    fn index(entries: &[(&str, &[(&str, &str)])]) -> DeclarationIndex {
        entries
            .iter()
            .map(|(key, values)| {
                let occurrences = values
                    .iter()
                    .map(|(value, path)| Occurrence::new(*value, *path, 1))
                    .collect();
                (key.to_string(), occurrences)
            })
            .collect()
    }

    #[test]
    fn test_missing_specifier_is_mismatch() {
        let declarations = index(&[("GREETING", &[("Hello %@", EN), ("Bonjour", FR)])]);

        let issues = check_mismatched_parameters(&declarations);
        assert_eq!(
            issues,
            vec![MismatchedParametersIssue {
                key: "GREETING".to_string(),
                declarations: vec![
                    Occurrence::new("Hello %@", EN, 1),
                    Occurrence::new("Bonjour", FR, 1),
                ],
            }]
        );
    }

    #[test]
    fn test_identical_values_never_mismatch() {
        let declarations = index(&[
            ("COUNT", &[("%d items", EN), ("%d items", FR), ("%d items", DE)]),
            ("PLAIN", &[("OK", EN), ("OK", FR)]),
        ]);

        assert!(find_mismatched_keys(&declarations).is_empty());
    }

    #[test]
    fn test_positional_order_matters() {
        let declarations = index(&[(
            "DISTANCE",
            &[("%1$@ is %2$d km away", EN), ("à %2$d km : %1$@", FR)],
        )]);

        assert_eq!(
            find_mismatched_keys(&declarations),
            BTreeSet::from(["DISTANCE".to_string()])
        );
    }

    #[test]
    fn test_mismatch_between_later_languages() {
        let declarations = index(&[(
            "SCORE",
            &[("%d points", EN), ("%d points", FR), ("%@ Punkte", DE)],
        )]);

        assert_eq!(find_mismatched_keys(&declarations).len(), 1);
    }

    #[test]
    fn test_single_declaration_is_never_compared() {
        let declarations = index(&[("SOLO", &[("%@ and %d", EN)])]);
        assert!(find_mismatched_keys(&declarations).is_empty());
    }
}
