use std::path::PathBuf;

/// Diagnostics emitted while traversing. None of them stop the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalEvent {
    /// File kind is neither style nor script.
    NotApplicable { source: PathBuf },
    /// Style or script file without banner comments.
    NoComments { source: PathBuf },
    /// Comments appended to the combined document.
    AddedToDocument { source: PathBuf, target: PathBuf },
    /// Comments appended to the source's own document.
    DocumentUpdated { source: PathBuf, target: PathBuf },
    /// Subdirectory not descended into.
    SkippedDirectory { path: PathBuf },
    /// Entry matched an ignore pattern.
    Ignored { path: PathBuf },
    /// Import already processed earlier in the run.
    ImportRevisited { path: PathBuf },
}

/// Receives traversal diagnostics.
pub trait Reporter {
    fn report(&mut self, event: &TraversalEvent);
}

/// Discards every event.
#[derive(Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&mut self, _event: &TraversalEvent) {}
}

/// Records every event, in order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<TraversalEvent>,
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: &TraversalEvent) {
        self.events.push(event.clone());
    }
}
