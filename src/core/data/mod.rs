//! Core data types used across all pipeline phases.
//!
//! ## Module Structure
//!
//! - `file_kind`: FileKind enum (strings, source, interface files)
//! - `language`: Language detection from `.lproj` paths and the language universe
//! - `occurrence`: Occurrence, Declaration and the two key indexes

pub mod file_kind;
pub mod language;
pub mod occurrence;

pub use file_kind::FileKind;
pub use language::{BUNDLE_SUFFIX, Languages, language_for_path};
pub use occurrence::{Declaration, DeclarationIndex, Occurrence, UsageIndex};
