//! printf-style format specifier extraction.
//!
//! Covers the Foundation format grammar: `%` + optional positional index
//! (`1$`) + optional sign + length modifiers + optional padding + width and
//! precision + one conversion character.

use std::sync::LazyLock;

use regex::Regex;

static FORMAT_SPECIFIER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"%(?:\d+\$)?[+-]?(?:[lh]{0,2})(?:[qLztj])?(?:[ 0]|'.{1})?\d*(?:\.\d+)?[@dDiuUxXoOfeEgGcCsSpaAFn]",
    )
    .expect("format specifier pattern is valid")
});

/// Format specifiers of a value, in order of appearance.
pub fn format_specifiers(value: &str) -> Vec<&str> {
    FORMAT_SPECIFIER_REGEX
        .find_iter(value)
        .map(|m| m.as_str())
        .collect()
}

/// Returns true if two values have the same specifiers at the same positions.
pub fn specifiers_match(a: &str, b: &str) -> bool {
    format_specifiers(a) == format_specifiers(b)
}
