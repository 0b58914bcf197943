use std::path::{Path, PathBuf};

use glob::Pattern;

pub const DEFAULT_OUTPUT_FOLDER: &str = "output";
pub const DEFAULT_OUTPUT_FILE: &str = "docs";

/// What the tree walk does with subdirectories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubdirPolicy {
    #[default]
    Recurse,
    /// Report the directory and move on.
    Skip,
}

/// Guard applied to `@import` following.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportGuard {
    /// Follow every import, even ones already processed. Cyclic imports
    /// never terminate in this mode.
    #[default]
    Unchecked,
    /// Skip imports already processed in this run.
    VisitedSet,
}

/// Immutable settings for one extraction run.
///
/// Built once before the session starts and passed by reference into every
/// traversal and rendering call.
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    pub entry: PathBuf,
    pub output_dir: PathBuf,
    /// One combined document instead of one per source file.
    pub consolidate: bool,
    pub follow_imports: bool,
    /// Base name (no extension) of the combined document.
    pub output_file: String,
    pub public_folder: Option<String>,
    pub add_source: bool,
    pub headings: bool,
    pub subdirs: SubdirPolicy,
    pub import_guard: ImportGuard,
    pub ignores: Vec<Pattern>,
}

impl TraversalConfig {
    pub fn new(entry: impl Into<PathBuf>) -> Self {
        Self {
            entry: entry.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_FOLDER),
            consolidate: true,
            follow_imports: false,
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            public_folder: None,
            add_source: true,
            headings: false,
            subdirs: SubdirPolicy::default(),
            import_guard: ImportGuard::default(),
            ignores: Vec::new(),
        }
    }

    /// Base path for source links, when links are enabled.
    pub fn source_link_base(&self) -> Option<&str> {
        if self.add_source {
            self.public_folder.as_deref()
        } else {
            None
        }
    }

    /// True when `path`, taken relative to `root`, matches an ignore pattern.
    pub fn is_ignored(&self, root: &Path, path: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        self.ignores.iter().any(|p| p.matches_path(relative))
    }
}
