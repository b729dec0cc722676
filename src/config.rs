use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = ".locstringsrc.json";

/// Default localization function.
pub const DEFAULT_FUNCTION: &str = "NSLocalizedString";

/// Strings files whose name ends with this are scanned for declarations.
pub const DEFAULT_STRINGS_FILE: &str = "Localizable.strings";

/// File names that are never scanned for usages.
pub const ALWAYS_IGNORED_FILES: &[&str] = &["main.swift"];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_function")]
    pub function: String,
    #[serde(default)]
    pub variables: Vec<String>,
    #[serde(default)]
    pub ignore_files: Vec<String>,
    #[serde(default = "default_excluded_directories")]
    pub excluded_directories: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_strings_file")]
    pub strings_file: String,
}

fn default_function() -> String {
    DEFAULT_FUNCTION.to_string()
}

fn default_excluded_directories() -> Vec<String> {
    ["Pods", "Frameworks", "Products"]
        .map(String::from)
        .to_vec()
}

fn default_strings_file() -> String {
    DEFAULT_STRINGS_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            function: default_function(),
            variables: Vec::new(),
            ignore_files: Vec::new(),
            excluded_directories: default_excluded_directories(),
            ignores: Vec::new(),
            strings_file: default_strings_file(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or a
    /// required name is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        if self.function.trim().is_empty() {
            anyhow::bail!("'function' must not be empty");
        }

        if self.strings_file.trim().is_empty() {
            anyhow::bail!("'stringsFile' must not be empty");
        }

        Ok(())
    }

    /// File names excluded from usage scanning, including the built-in ones.
    pub fn ignored_file_names(&self) -> HashSet<String> {
        ALWAYS_IGNORED_FILES
            .iter()
            .map(|s| s.to_string())
            .chain(self.ignore_files.iter().cloned())
            .collect()
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

/// Split a comma-separated command line list, dropping empty items.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
