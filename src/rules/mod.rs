//! Cross-reference rules for locstrings.
//!
//! Each rule is a pure function over the declaration and usage indexes. The
//! `*_issues` entry points take a [`CheckContext`](crate::core::CheckContext)
//! and return issues sorted by key.
//!
//! ## Module Structure
//!
//! - `unused`: Declared but never referenced keys
//! - `missing`: Keys without a translation in some languages
//! - `mismatched`: Translations whose format specifiers disagree

pub mod mismatched;
pub mod missing;
pub mod unused;

pub use mismatched::check_mismatched_parameters_issues;
pub use missing::check_missing_keys_issues;
pub use unused::check_unused_keys_issues;
