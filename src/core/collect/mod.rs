//! Index building: reading files and folding extracted lines into the
//! declaration and usage indexes.
//!
//! Both builders take the candidate file list as an explicit value from the
//! file scanner. File reads run in parallel; folding happens in input order.

pub mod declarations;
pub mod lines;
pub mod usages;

pub use declarations::{DeclarationScan, RedefinitionError, build_declaration_index};
pub use lines::{FileReadWarning, read_lines};
pub use usages::{UsageScan, build_usage_index, is_ignored_file};
