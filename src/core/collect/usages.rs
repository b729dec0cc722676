//! Usage index: every site in source and interface files that references a key.

use std::{collections::HashSet, path::Path};

use rayon::prelude::*;

use super::lines::{FileReadWarning, read_lines};
use crate::core::{
    FileKind, Occurrence, UsageIndex,
    extract::{UsageExtractor, is_comment_line},
};

/// Result of scanning all source and interface files.
#[derive(Debug, Default)]
pub struct UsageScan {
    pub index: UsageIndex,
    /// Number of source and interface files scanned.
    pub file_count: usize,
    pub warnings: Vec<FileReadWarning>,
}

/// Returns true if the file name of `path` is one of `ignored_file_names`.
pub fn is_ignored_file(path: &str, ignored_file_names: &HashSet<String>) -> bool {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| ignored_file_names.contains(name))
}

/// Build the usage index from the candidate file list.
pub fn build_usage_index(
    files: &[String],
    ignored_file_names: &HashSet<String>,
    extractor: &UsageExtractor,
    strings_suffix: &str,
) -> UsageScan {
    let usage_files: Vec<(&String, FileKind)> = files
        .iter()
        .filter(|path| !is_ignored_file(path, ignored_file_names))
        .filter_map(|path| {
            FileKind::from_path(path, strings_suffix)
                .filter(FileKind::is_usage_bearing)
                .map(|kind| (path, kind))
        })
        .collect();

    let extracted: Vec<Result<Vec<(String, Occurrence)>, FileReadWarning>> = usage_files
        .par_iter()
        .map(|(path, kind)| {
            read_lines(path)
                .map(|lines| extract_file_usages(path, &lines, *kind, extractor))
                .map_err(|e| FileReadWarning::new(path.as_str(), &e))
        })
        .collect();

    let mut scan = UsageScan {
        file_count: extracted.len(),
        ..Default::default()
    };

    for result in extracted {
        match result {
            Ok(usages) => {
                for (key, occurrence) in usages {
                    scan.index.entry(key).or_default().push(occurrence);
                }
            }
            Err(warning) => scan.warnings.push(warning),
        }
    }

    scan
}

/// Every `(key, occurrence)` pair in one file, in line order.
///
/// Full-line `//` comments are skipped.
pub fn extract_file_usages(
    file_path: &str,
    lines: &[String],
    kind: FileKind,
    extractor: &UsageExtractor,
) -> Vec<(String, Occurrence)> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !is_comment_line(line))
        .flat_map(|(i, line)| {
            extractor
                .extract(line, kind)
                .into_iter()
                .map(move |key| (key.to_string(), Occurrence::new(key, file_path, i + 1)))
        })
        .collect()
}
