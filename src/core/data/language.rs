use std::{
    collections::{BTreeMap, BTreeSet},
    path::Path,
};

/// Directory suffix of an Xcode localization bundle (`en.lproj`).
pub const BUNDLE_SUFFIX: &str = ".lproj";

/// Extracts the language from a strings file path.
///
/// The language is the name of the nearest `*.lproj` ancestor directory.
///
/// Examples:
/// - "App/en.lproj/Localizable.strings" -> Some("en")
/// - "App/pt-BR.lproj/Localizable.strings" -> Some("pt-BR")
/// - "App/Localizable.strings" -> None
pub fn language_for_path(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .ancestors()
        .skip(1)
        .filter_map(|dir| dir.file_name().and_then(|n| n.to_str()))
        .find_map(|name| name.strip_suffix(BUNDLE_SUFFIX))
        .filter(|language| !language.is_empty())
        .map(str::to_string)
}

/// The language universe discovered from strings file paths.
///
/// Each language remembers the first strings file seen for it, which is
/// where findings with no better location are reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Languages {
    files: BTreeMap<String, String>,
}

impl Languages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a language. The first file registered for a language wins.
    pub fn insert(&mut self, language: impl Into<String>, file_path: impl Into<String>) {
        self.files
            .entry(language.into())
            .or_insert_with(|| file_path.into());
    }

    pub fn contains(&self, language: &str) -> bool {
        self.files.contains_key(language)
    }

    /// Strings file registered for a language.
    pub fn file_for(&self, language: &str) -> Option<&str> {
        self.files.get(language).map(String::as_str)
    }

    /// Languages in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Languages of the universe that are not in `present`.
    pub fn missing_from(&self, present: &BTreeSet<String>) -> BTreeSet<String> {
        self.iter()
            .filter(|language| !present.contains(*language))
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
