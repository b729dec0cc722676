//! Declaration index: every key declared in a strings file, per language.

use rayon::prelude::*;
use thiserror::Error;

use super::lines::{FileReadWarning, read_lines};
use crate::core::{
    Declaration, DeclarationIndex, FileKind, Languages, Occurrence, extract::extract_declaration,
    language_for_path,
};

/// A key declared twice in the same strings file.
///
/// The resource layer cannot tell which of the two values wins, so the run
/// stops here instead of reporting findings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Redefined key {key} in file: {language}")]
pub struct RedefinitionError {
    pub key: String,
    pub file_path: String,
    /// Line of the second declaration (1-indexed).
    pub line: usize,
    /// Language of the file, empty when the path has no `.lproj` directory.
    pub language: String,
}

/// Result of scanning all strings files.
#[derive(Debug, Default)]
pub struct DeclarationScan {
    pub index: DeclarationIndex,
    pub languages: Languages,
    /// Number of strings files scanned.
    pub file_count: usize,
    pub warnings: Vec<FileReadWarning>,
}

/// Build the declaration index from the candidate file list.
///
/// Only files whose name ends with `strings_suffix` are read. Files are
/// read in parallel and folded in input order, so the result does not depend
/// on scheduling.
pub fn build_declaration_index(
    files: &[String],
    strings_suffix: &str,
) -> Result<DeclarationScan, RedefinitionError> {
    let strings_files: Vec<&String> = files
        .iter()
        .filter(|path| FileKind::from_path(path, strings_suffix) == Some(FileKind::Strings))
        .collect();

    let parsed: Vec<(&String, Result<Vec<Declaration>, FileReadWarning>)> = strings_files
        .par_iter()
        .map(|path| {
            let declarations = read_lines(path)
                .map(|lines| parse_declarations(&lines))
                .map_err(|e| FileReadWarning::new(path.as_str(), &e));
            (*path, declarations)
        })
        .collect();

    let mut scan = DeclarationScan {
        file_count: parsed.len(),
        ..Default::default()
    };

    for (path, declarations) in parsed {
        match declarations {
            Ok(declarations) => insert_declarations(&mut scan.index, path, declarations)?,
            Err(warning) => scan.warnings.push(warning),
        }
        if let Some(language) = language_for_path(path) {
            scan.languages.insert(language, path.as_str());
        }
    }

    Ok(scan)
}

/// All declarations in a strings file, in line order.
pub fn parse_declarations(lines: &[String]) -> Vec<Declaration> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| extract_declaration(line, i + 1))
        .collect()
}

/// Fold one file's declarations into the index.
///
/// Fails on the first key that already has an occurrence from the same file.
pub fn insert_declarations(
    index: &mut DeclarationIndex,
    file_path: &str,
    declarations: Vec<Declaration>,
) -> Result<(), RedefinitionError> {
    for Declaration { key, value, line } in declarations {
        let occurrences = index.entry(key.clone()).or_default();
        if occurrences.iter().any(|o| o.file_path == file_path) {
            return Err(RedefinitionError {
                key,
                file_path: file_path.to_string(),
                line,
                language: language_for_path(file_path).unwrap_or_default(),
            });
        }
        occurrences.push(Occurrence::new(value, file_path, line));
    }
    Ok(())
}
