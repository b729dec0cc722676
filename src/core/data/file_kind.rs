use std::path::Path;

/// Kind of a scanned file, decided by its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// A strings file declaring `"key" = "value";` pairs for one language.
    Strings,
    /// Swift or Objective-C source: `NSLocalizedString("key", ...)` style usages.
    Source,
    /// Storyboard or xib: `keyPath="..." value="key"` style usages.
    Interface,
}

impl FileKind {
    /// Classify a path. `strings_suffix` is the file name suffix that marks
    /// a strings file (e.g. `Localizable.strings`).
    ///
    /// Returns `None` for files that are never scanned.
    pub fn from_path(path: impl AsRef<Path>, strings_suffix: &str) -> Option<Self> {
        let path = path.as_ref();
        let file_name = path.file_name().and_then(|n| n.to_str())?;

        if file_name.ends_with(strings_suffix) {
            return Some(FileKind::Strings);
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some("swift" | "m") => Some(FileKind::Source),
            Some("storyboard" | "xib") => Some(FileKind::Interface),
            _ => None,
        }
    }

    /// Returns true for files that may contain key usages.
    pub fn is_usage_bearing(&self) -> bool {
        matches!(self, FileKind::Source | FileKind::Interface)
    }
}
