use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Kind of a source file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// `.css` and `.scss`
    Style,
    /// `.js`, `.mjs` and `.cjs`
    Script,
    Unrecognized,
}

impl SourceKind {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("css" | "scss") => Self::Style,
            Some("js" | "mjs" | "cjs") => Self::Script,
            _ => Self::Unrecognized,
        }
    }

    pub fn is_recognized(self) -> bool {
        !matches!(self, Self::Unrecognized)
    }
}

/// A source file read once for a single visit.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
#[derive(Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub kind: SourceKind,
    pub content: String,
}

impl SourceFile {
    pub fn read(path: &Path) -> Result<Self> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            kind: SourceKind::from_path(path),
            content: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    /// File name including extension, e.g. `button.scss`.
    pub fn file_name(&self) -> String {
        file_name(&self.path)
    }

    /// File name without extension, e.g. `button`.
    pub fn stem(&self) -> String {
        file_stem(&self.path)
    }

    /// Directory containing the file.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
