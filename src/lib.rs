//! locstrings - localization audit for Xcode projects
//!
//! locstrings cross-references the keys declared in `.lproj` strings files
//! with the keys referenced from Swift, Objective-C, storyboard and xib files.
//! It reports unused keys, keys missing in some languages and translations
//! whose format specifiers disagree.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, report, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core analysis engine (scan, extract, collect)
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Cross-reference rules over the two indexes

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
