use std::fs;

use anyhow::{Context, Result};

/// A file that could not be read. It contributes nothing to the indexes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReadWarning {
    pub file_path: String,
    pub error: String,
}

impl FileReadWarning {
    pub fn new(file_path: impl Into<String>, error: &anyhow::Error) -> Self {
        Self {
            file_path: file_path.into(),
            error: format!("{:#}", error),
        }
    }
}

/// Read a UTF-8 file into lines.
///
/// Handles both `\n` and `\r\n` line endings and drops a leading byte order mark.
pub fn read_lines(path: &str) -> Result<Vec<String>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
    Ok(split_lines(&content))
}

pub fn split_lines(content: &str) -> Vec<String> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    content.lines().map(str::to_string).collect()
}
