use std::{
    fs,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths relative to the project root.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    /// Candidate files, sorted by path.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

/// Walk the project and return every regular file that is not excluded.
///
/// `excluded_directories` are directory names skipped when they sit directly
/// under the project root or under `<project folder name>/` (the usual Xcode
/// layout, e.g. `MyApp/Pods`).
pub fn scan_files(
    base_dir: &str,
    excluded_directories: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files: Vec<String> = Vec::new();
    let mut skipped_count = 0;

    let root = Path::new(base_dir);
    let excluded_paths = excluded_paths(root, excluded_directories);

    // Separate ignore patterns into literal paths and glob patterns
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(root.join(p));
        }
    }

    let is_excluded = |entry: &DirEntry| {
        entry.file_type().is_dir()
            && entry
                .path()
                .strip_prefix(root)
                .is_ok_and(|rel| excluded_paths.iter().any(|excluded| rel == excluded.as_path()))
    };

    for entry in WalkDir::new(root).into_iter().filter_entry(|e| !is_excluded(e)) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        let path_str = path.to_string_lossy();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if entry.file_type().is_file() {
            files.push(path_str.into());
        }
    }

    files.sort();

    ScanResult {
        files,
        skipped_count,
    }
}

/// Relative paths of excluded directories: `<name>` and `<project folder>/<name>`.
fn excluded_paths(root: &Path, excluded_directories: &[String]) -> Vec<PathBuf> {
    let project_folder = root
        .file_name()
        .map(PathBuf::from)
        .or_else(|| {
            fs::canonicalize(root)
                .ok()
                .and_then(|p| p.file_name().map(PathBuf::from))
        });

    excluded_directories
        .iter()
        .flat_map(|dir| {
            let nested = project_folder.as_ref().map(|folder| folder.join(dir));
            std::iter::once(PathBuf::from(dir)).chain(nested)
        })
        .collect()
}
