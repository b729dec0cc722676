//! Declaration extraction from strings files.
//!
//! A strings file holds one `"key" = "value";` statement per line. Only
//! full-line `//` comments are recognized.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::Declaration;

static DECLARATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*"(.+)"\s*=\s*"(.*)"\s*;"#).expect("declaration pattern is valid")
});

/// Returns true if the line is a full-line `//` comment.
pub fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with("//")
}

/// Parse a `"key" = "value";` statement from one line.
///
/// `line_number` is 1-indexed. Comment lines and lines that do not match the
/// statement grammar yield `None`.
pub fn extract_declaration(line: &str, line_number: usize) -> Option<Declaration> {
    if is_comment_line(line) {
        return None;
    }

    let captures = DECLARATION_REGEX.captures(line)?;
    let key = captures.get(1)?.as_str();
    let value = captures.get(2)?.as_str();
    Some(Declaration::new(key, value, line_number))
}
