use std::collections::BTreeMap;

/// A single textual match in a scanned file.
///
/// For declarations `value` is the translated value; for usages it is the
/// literal key text that was matched.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Occurrence {
    /// The matched literal text.
    pub value: String,
    /// Path of the file the match came from.
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
}

impl Occurrence {
    pub fn new(value: impl Into<String>, file_path: impl Into<String>, line: usize) -> Self {
        Self {
            value: value.into(),
            file_path: file_path.into(),
            line,
        }
    }
}

/// A `"key" = "value";` statement parsed from one line of a strings file.
///
/// Produced per matching line and folded into a [`DeclarationIndex`] right away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub key: String,
    pub value: String,
    /// Line number (1-indexed).
    pub line: usize,
}

impl Declaration {
    pub fn new(key: impl Into<String>, value: impl Into<String>, line: usize) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            line,
        }
    }
}

/// Declared keys: key -> one occurrence per strings file that declares it.
///
/// Occurrences are kept in the order their files were scanned.
pub type DeclarationIndex = BTreeMap<String, Vec<Occurrence>>;

/// Referenced keys: key -> every site that references it.
pub type UsageIndex = BTreeMap<String, Vec<Occurrence>>;
