//! Turns parsed arguments into a run.
//!
//! Settings are resolved once (defaults < `.bannerdocrc.json` < flags) into
//! an immutable [`TraversalConfig`] before the session starts.

use std::{env, fs, path::Path};

use anyhow::{Context, Result, bail};

use super::{args::Arguments, report};
use crate::{
    config::{CONFIG_FILE_NAME, Config, default_config_json, load_config},
    core::{FsSink, ImportGuard, SubdirPolicy, TraversalConfig, TraversalStats, run_session},
    error::UsageError,
};

/// What a finished invocation did.
#[derive(Debug)]
pub enum RunOutcome {
    Initialized,
    Extracted(TraversalStats),
}

pub fn run(args: &Arguments) -> Result<RunOutcome> {
    if args.init {
        init(Path::new(CONFIG_FILE_NAME))?;
        return Ok(RunOutcome::Initialized);
    }

    let file_config = if args.no_config {
        Config::default()
    } else {
        let cwd = env::current_dir().context("Failed to read the current directory")?;
        let loaded = load_config(&cwd)?;
        if args.verbose {
            match &loaded.path {
                Some(path) => eprintln!("Note: Using configuration from {}", path.display()),
                None => eprintln!("Note: No {} found, using defaults", CONFIG_FILE_NAME),
            }
        }
        loaded.config
    };

    let config = build_config(args, &file_config)?;
    let mut reporter = report::ConsoleReporter::stdout(args.verbose, args.quiet);
    let stats = run_session(&config, &mut FsSink, &mut reporter)?;
    Ok(RunOutcome::Extracted(stats))
}

/// Merges flags over file configuration.
pub fn build_config(args: &Arguments, file: &Config) -> Result<TraversalConfig> {
    let Some(entry) = &args.entry_path else {
        return Err(UsageError::MissingEntryPath.into());
    };

    let output_file = args
        .output_file
        .clone()
        .unwrap_or_else(|| file.output_file.clone());
    if output_file.trim().is_empty() {
        return Err(UsageError::EmptyOutputFile.into());
    }

    let mut config = TraversalConfig::new(entry);
    config.output_dir = args
        .folder
        .clone()
        .unwrap_or_else(|| file.folder.clone().into());
    config.consolidate = !(args.multiple || file.multiple);
    config.follow_imports = args.scss_imports;
    config.output_file = output_file;
    config.public_folder = args
        .public_folder
        .clone()
        .or_else(|| file.public_folder.clone());
    config.add_source = !(args.remove_source || file.remove_source);
    config.headings = args.headings || file.headings;
    config.subdirs = if args.flat || !file.recursive {
        SubdirPolicy::Skip
    } else {
        SubdirPolicy::Recurse
    };
    config.import_guard = if args.strict_imports || file.strict_imports {
        ImportGuard::VisitedSet
    } else {
        ImportGuard::Unchecked
    };
    config.ignores = file.ignore_patterns()?;

    Ok(config)
}

fn init(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        bail!("{} already exists", config_path.display());
    }

    fs::write(config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(())
}
