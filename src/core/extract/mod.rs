//! Line-level extraction of declarations and usages.
//!
//! Everything in this module is a pure function of one line of text: no file
//! access, no shared state. The collect phase feeds lines in and folds the
//! results into indexes.

pub mod declaration;
pub mod format_specifier;
pub mod usage;

pub use declaration::{extract_declaration, is_comment_line};
pub use format_specifier::{format_specifiers, specifiers_match};
pub use usage::{ExtractionRule, InvalidRule, UsageExtractor};
