use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{
    events::Reporter,
    imports::normalize_path,
    options::TraversalConfig,
    sink::DocumentSink,
    traverse::{Traversal, TraversalStats},
};
use crate::error::UsageError;

/// Runs one extraction: validates the entry, resets the output directory,
/// then walks the entry once.
///
/// Nothing is rolled back on failure. Documents written before an I/O
/// fault stay on disk.
pub fn run_session<S: DocumentSink, R: Reporter>(
    config: &TraversalConfig,
    sink: &mut S,
    reporter: &mut R,
) -> Result<TraversalStats> {
    if is_current_dir_shorthand(&config.entry) {
        return Err(UsageError::CurrentDirectoryEntry(config.entry.clone()).into());
    }

    let entry = absolute(&config.entry)?;
    let output_dir = absolute(&config.output_dir)?;
    if entry.starts_with(&output_dir) {
        return Err(UsageError::EntryInsideOutput {
            entry: config.entry.clone(),
            output: config.output_dir.clone(),
        }
        .into());
    }

    clear_output_dir(&config.output_dir)?;
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output_dir.display()
        )
    })?;

    let mut traversal = Traversal::new(config, sink, reporter);
    traversal.walk(&entry)?;
    Ok(traversal.into_stats())
}

/// `.`, `./` and other spellings made only of current-directory components.
pub fn is_current_dir_shorthand(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.components().all(|c| matches!(c, Component::CurDir))
}

fn clear_output_dir(output_dir: &Path) -> Result<()> {
    if output_dir.exists() {
        fs::remove_dir_all(output_dir).with_context(|| {
            format!("Failed to clear output directory: {}", output_dir.display())
        })?;
    }
    Ok(())
}

fn absolute(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)
        .with_context(|| format!("Failed to resolve path: {}", path.display()))?;
    Ok(normalize_path(&absolute))
}
