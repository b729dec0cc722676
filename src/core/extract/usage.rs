//! Usage extraction from source and interface files.
//!
//! Usages are found by literal pattern matching, one line at a time. The
//! patterns form a closed set of [`ExtractionRule`]s; each rule applies to one
//! kind of file and all applicable rules are evaluated for every line.

use regex::Regex;

use crate::core::FileKind;

/// One usage pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionRule {
    /// Call of the localization function: `NSLocalizedString("KEY", comment: "")`
    /// or `NSLocalizedString(@"KEY", nil)`.
    Call { function: String },
    /// Assignment of a string literal to a known variable: `localizedString = "KEY"`.
    Assignment { variable: String },
    /// Interface builder user-defined runtime attribute:
    /// `keyPath="localizedString" value="KEY"`.
    Attribute { key_path: String },
}

impl ExtractionRule {
    /// Regex for this rule. Capture group 1 is the key.
    pub fn pattern(&self) -> String {
        match self {
            ExtractionRule::Call { function } => {
                format!(r#"{}\(*@?"(.*?)"[,)]"#, regex::escape(function))
            }
            ExtractionRule::Assignment { variable } => {
                format!(r#"{} = "(.*?)""#, regex::escape(variable))
            }
            ExtractionRule::Attribute { key_path } => {
                format!(r#"keyPath="{}" value="(.*?)""#, regex::escape(key_path))
            }
        }
    }

    pub fn applies_to(&self, kind: FileKind) -> bool {
        match self {
            ExtractionRule::Call { .. } | ExtractionRule::Assignment { .. } => {
                kind == FileKind::Source
            }
            ExtractionRule::Attribute { .. } => kind == FileKind::Interface,
        }
    }
}

impl std::fmt::Display for ExtractionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionRule::Call { function } => write!(f, "call to '{}'", function),
            ExtractionRule::Assignment { variable } => {
                write!(f, "assignment to '{}'", variable)
            }
            ExtractionRule::Attribute { key_path } => write!(f, "attribute '{}'", key_path),
        }
    }
}

/// A rule whose pattern could not be compiled. It never matches.
#[derive(Debug, Clone)]
pub struct InvalidRule {
    pub rule: ExtractionRule,
    pub error: String,
}

/// Compiled usage rules for one run.
#[derive(Debug, Clone)]
pub struct UsageExtractor {
    rules: Vec<(ExtractionRule, Regex)>,
    invalid: Vec<InvalidRule>,
}

impl UsageExtractor {
    /// Build the rule set for a localization function and extra variable names.
    ///
    /// Source files get the call rule followed by one assignment rule per
    /// variable; interface files get one attribute rule per variable.
    pub fn new(function: &str, variables: &[String]) -> Self {
        let rules = std::iter::once(ExtractionRule::Call {
            function: function.to_string(),
        })
        .chain(variables.iter().map(|v| ExtractionRule::Assignment {
            variable: v.clone(),
        }))
        .chain(variables.iter().map(|v| ExtractionRule::Attribute {
            key_path: v.clone(),
        }));

        Self::from_rules(rules)
    }

    pub fn from_rules(rules: impl IntoIterator<Item = ExtractionRule>) -> Self {
        let mut compiled = Vec::new();
        let mut invalid = Vec::new();

        for rule in rules {
            match Regex::new(&rule.pattern()) {
                Ok(regex) => compiled.push((rule, regex)),
                Err(e) => invalid.push(InvalidRule {
                    rule,
                    error: e.to_string(),
                }),
            }
        }

        Self {
            rules: compiled,
            invalid,
        }
    }

    /// Rules that failed to compile and are skipped.
    pub fn invalid_rules(&self) -> &[InvalidRule] {
        &self.invalid
    }

    /// All keys referenced on one line.
    ///
    /// Matches are returned rule by rule in rule order, left to right within a
    /// rule. Lines where nothing matches yield an empty vector.
    pub fn extract<'a>(&self, line: &'a str, kind: FileKind) -> Vec<&'a str> {
        self.rules
            .iter()
            .filter(|(rule, _)| rule.applies_to(kind))
            .flat_map(|(_, regex)| {
                regex
                    .captures_iter(line)
                    .filter_map(|captures| captures.get(1))
                    .map(|m| m.as_str())
            })
            .collect()
    }
}
