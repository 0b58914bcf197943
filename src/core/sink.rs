use std::{
    collections::BTreeMap,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Append-only destination for rendered Markdown.
pub trait DocumentSink {
    /// Appends `text` to the document at `target`, creating it (and its
    /// parent directory) on first write.
    fn append(&mut self, target: &Path, text: &str) -> Result<()>;
}

/// Writes documents to the file system.
#[derive(Debug, Default)]
pub struct FsSink;

impl DocumentSink for FsSink {
    fn append(&mut self, target: &Path, text: &str) -> Result<()> {
        if let Some(parent) = target.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(target)
            .with_context(|| format!("Failed to open document: {}", target.display()))?;
        file.write_all(text.as_bytes())
            .with_context(|| format!("Failed to write document: {}", target.display()))?;

        Ok(())
    }
}

/// Keeps documents in memory, keyed by target path.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub documents: BTreeMap<PathBuf, String>,
}

impl MemorySink {
    pub fn document(&self, target: &Path) -> Option<&str> {
        self.documents.get(target).map(String::as_str)
    }
}

impl DocumentSink for MemorySink {
    fn append(&mut self, target: &Path, text: &str) -> Result<()> {
        self.documents
            .entry(target.to_path_buf())
            .or_default()
            .push_str(text);
        Ok(())
    }
}
