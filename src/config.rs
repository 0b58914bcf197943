use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::{
    core::options::{DEFAULT_OUTPUT_FILE, DEFAULT_OUTPUT_FOLDER},
    error::UsageError,
};

pub const CONFIG_FILE_NAME: &str = ".bannerdocrc.json";

/// Project defaults read from `.bannerdocrc.json`. Command-line flags win
/// over every value here.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_folder")]
    pub folder: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_folder: Option<String>,
    #[serde(default)]
    pub remove_source: bool,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_recursive")]
    pub recursive: bool,
    #[serde(default)]
    pub strict_imports: bool,
    #[serde(default)]
    pub headings: bool,
}

fn default_folder() -> String {
    DEFAULT_OUTPUT_FOLDER.to_string()
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

fn default_recursive() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            folder: default_folder(),
            output_file: default_output_file(),
            public_folder: None,
            remove_source: false,
            multiple: false,
            ignores: Vec::new(),
            recursive: default_recursive(),
            strict_imports: false,
            headings: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Fails on invalid `ignores` globs or an empty `outputFile`.
    pub fn validate(&self) -> Result<()> {
        self.ignore_patterns()?;
        if self.output_file.trim().is_empty() {
            return Err(UsageError::EmptyOutputFile.into());
        }
        Ok(())
    }

    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|source| {
                    anyhow::Error::from(UsageError::InvalidIgnorePattern {
                        pattern: pattern.clone(),
                        source,
                    })
                })
            })
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Searches `start_dir` and its ancestors, stopping at the repository root.
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
    /// Path of the file the config came from, `None` for defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
