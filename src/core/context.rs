use std::path::Path;

use anyhow::{Context as _, Result};
use colored::Colorize;

use crate::{
    cli::args::Arguments,
    config::{CONFIG_FILE_NAME, Config, ConfigLoadResult, load_config, split_list},
    core::{
        collect::{
            DeclarationScan, FileReadWarning, UsageScan, build_declaration_index, build_usage_index,
        },
        extract::UsageExtractor,
        file_scanner::scan_files,
    },
};

/// Analysis context holding both indexes for one project.
///
/// Built in a fixed order:
///
/// 1. Configuration (CLI arguments > `.locstringsrc.json` > defaults)
/// 2. File scan (the candidate path list, sorted)
/// 3. Declaration index (fails on a redefined key)
/// 4. Usage index
///
/// Rules only read from the context; nothing is mutated after `new` returns.
pub struct CheckContext {
    pub declarations: DeclarationScan,

    pub usages: UsageScan,
}

impl CheckContext {
    /// Scan the project and build both indexes.
    ///
    /// A redefined key surfaces as a [`RedefinitionError`] inside the returned
    /// error, so callers can tell it apart from I/O and config failures with
    /// `downcast`.
    ///
    /// A project root that is not a directory is not an error: it is reported
    /// as a warning and yields empty indexes.
    ///
    /// [`RedefinitionError`]: crate::core::collect::RedefinitionError
    pub fn new(args: &Arguments, root_dir: &Path) -> Result<Self> {
        let verbose = args.verbose;

        let config_result = if root_dir.is_dir() {
            load_config(root_dir)
                .with_context(|| format!("Failed to load {}", CONFIG_FILE_NAME))?
        } else {
            eprintln!(
                "{} Project directory not found: {}",
                "warning:".bold().yellow(),
                root_dir.display()
            );
            ConfigLoadResult {
                config: Config::default(),
                from_file: false,
            }
        };
        if verbose && !config_result.from_file {
            eprintln!(
                "{} No {} found, using default configuration",
                "Note:".bold(),
                CONFIG_FILE_NAME
            );
        }
        let config = apply_arguments(config_result.config, args);

        let root = root_dir.to_string_lossy();
        let scan = scan_files(
            &root,
            &config.excluded_directories,
            &config.ignores,
            verbose,
        );

        let extractor = UsageExtractor::new(&config.function, &config.variables);
        for invalid in extractor.invalid_rules() {
            eprintln!(
                "{} Skipping pattern for {}: {}",
                "warning:".bold().yellow(),
                invalid.rule,
                invalid.error
            );
        }

        let declarations = build_declaration_index(&scan.files, &config.strings_file)?;
        let usages = build_usage_index(
            &scan.files,
            &config.ignored_file_names(),
            &extractor,
            &config.strings_file,
        );

        let ctx = Self {
            declarations,
            usages,
        };

        if verbose {
            for warning in ctx.read_warnings() {
                eprintln!(
                    "{} {}: {}",
                    "warning:".bold().yellow(),
                    warning.file_path,
                    warning.error
                );
            }
        }

        Ok(ctx)
    }

    /// Files that could not be read, declaration files first.
    pub fn read_warnings(&self) -> impl Iterator<Item = &FileReadWarning> {
        self.declarations
            .warnings
            .iter()
            .chain(self.usages.warnings.iter())
    }
}

/// Layer positional CLI values over the loaded configuration.
///
/// The function name replaces the configured one; variables and ignored
/// files are appended.
fn apply_arguments(mut config: Config, args: &Arguments) -> Config {
    if let Some(function) = args.function.as_deref().filter(|f| !f.trim().is_empty()) {
        config.function = function.trim().to_string();
    }
    if let Some(variables) = &args.variables {
        config.variables.extend(split_list(variables));
    }
    if let Some(ignore_files) = &args.ignore_files {
        config.ignore_files.extend(split_list(ignore_files));
    }
    config
}
