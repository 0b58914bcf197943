//! Tree walk and `@import` following.
//!
//! Both traversal modes run on one [`Traversal`]: the tree walk dispatches
//! every file to [`Traversal::process_file`], which in turn follows the
//! imports of style files when import-following is on. Imported files are
//! always written to the combined document.

use std::{
    collections::{BTreeSet, HashSet},
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use super::{
    events::{Reporter, TraversalEvent},
    extract::{Extraction, extract_comments},
    imports::{normalize_path, resolve_imports},
    markdown::render_section,
    options::{ImportGuard, SubdirPolicy, TraversalConfig},
    plan::output_target,
    sink::DocumentSink,
    source::{SourceFile, SourceKind},
};

/// Counters for a finished traversal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TraversalStats {
    /// Style and script files processed.
    pub files_visited: usize,
    pub comments_written: usize,
    /// Documents that received at least one write.
    pub documents: BTreeSet<PathBuf>,
}

pub struct Traversal<'a, S: DocumentSink, R: Reporter> {
    config: &'a TraversalConfig,
    sink: &'a mut S,
    reporter: &'a mut R,
    visited: HashSet<PathBuf>,
    stats: TraversalStats,
}

impl<'a, S: DocumentSink, R: Reporter> Traversal<'a, S, R> {
    pub fn new(config: &'a TraversalConfig, sink: &'a mut S, reporter: &'a mut R) -> Self {
        Self {
            config,
            sink,
            reporter,
            visited: HashSet::new(),
            stats: TraversalStats::default(),
        }
    }

    pub fn into_stats(self) -> TraversalStats {
        self.stats
    }

    /// Walks `path`: a single file is processed directly, a directory has
    /// its entries processed in file-name order.
    pub fn walk(&mut self, path: &Path) -> Result<()> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Cannot access path: {}", path.display()))?;
        if !metadata.is_dir() {
            return self.process_file(path, self.config.consolidate);
        }

        let max_depth = match self.config.subdirs {
            SubdirPolicy::Recurse => usize::MAX,
            SubdirPolicy::Skip => 1,
        };
        let mut entries = WalkDir::new(path)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = entries.next() {
            let entry =
                entry.with_context(|| format!("Failed to walk directory: {}", path.display()))?;
            let entry_path = entry.path();
            let is_dir = entry.file_type().is_dir();

            if self.config.is_ignored(path, entry_path) {
                self.reporter.report(&TraversalEvent::Ignored {
                    path: entry_path.to_path_buf(),
                });
                if is_dir {
                    entries.skip_current_dir();
                }
                continue;
            }

            if is_dir {
                if self.config.subdirs == SubdirPolicy::Skip {
                    self.reporter.report(&TraversalEvent::SkippedDirectory {
                        path: entry_path.to_path_buf(),
                    });
                }
                continue;
            }

            // Follows symlinks, so a link to a file counts as a file
            if entry_path.is_file() {
                self.process_file(entry_path, self.config.consolidate)?;
            }
        }

        Ok(())
    }

    /// Extracts, plans and writes one file, then follows its imports.
    ///
    /// Import-following does not depend on the file having comments of its
    /// own; an index file made only of `@import`s still pulls in its
    /// dependencies.
    pub fn process_file(&mut self, path: &Path, consolidated: bool) -> Result<()> {
        // A missing path fails here, whatever its extension
        let source = SourceFile::read(path)?;

        let comments = match extract_comments(&source.content, source.kind) {
            Extraction::NotApplicable => {
                self.reporter.report(&TraversalEvent::NotApplicable {
                    source: source.path,
                });
                return Ok(());
            }
            Extraction::Comments(comments) => comments,
        };

        if self.config.import_guard == ImportGuard::VisitedSet {
            self.visited.insert(normalize_path(path));
        }
        self.stats.files_visited += 1;

        if comments.is_empty() {
            self.reporter.report(&TraversalEvent::NoComments {
                source: source.path.clone(),
            });
        } else {
            let target = output_target(self.config, &source.path, consolidated);
            let markdown = render_section(&comments, &source, self.config);
            self.sink.append(&target, &markdown)?;

            self.stats.comments_written += comments.len();
            self.stats.documents.insert(target.clone());

            let event = if consolidated {
                TraversalEvent::AddedToDocument {
                    source: source.path.clone(),
                    target,
                }
            } else {
                TraversalEvent::DocumentUpdated {
                    source: source.path.clone(),
                    target,
                }
            };
            self.reporter.report(&event);
        }

        if self.config.follow_imports && source.kind == SourceKind::Style {
            for import in resolve_imports(&source.content, source.dir()) {
                if self.config.import_guard == ImportGuard::VisitedSet
                    && self.visited.contains(&import)
                {
                    self.reporter
                        .report(&TraversalEvent::ImportRevisited { path: import });
                    continue;
                }
                self.process_file(&import, true)?;
            }
        }

        Ok(())
    }
}
