//! Core analysis engine.
//!
//! ## Pipeline
//!
//! 1. **Scan**: `file_scanner` walks the project and returns the candidate path list
//! 2. **Extract**: `extract` turns single lines into declarations and key references
//! 3. **Collect**: `collect` folds extracted lines into the declaration and usage indexes
//! 4. **Rules** (outside core): cross-reference the two indexes
//!
//! ## Module Structure
//!
//! - `collect`: Index builders and file reading
//! - `context`: CheckContext, the indexes for one project
//! - `data`: Shared data types (Occurrence, FileKind, Languages)
//! - `extract`: Line-level pattern extraction
//! - `file_scanner`: Project traversal

pub mod collect;
pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;

pub use context::CheckContext;
pub use data::*;
