//! Extraction engine.
//!
//! Data flows one file at a time:
//!
//! 1. **Walk**: `traverse` visits the entry file or directory tree
//! 2. **Extract**: `extract` pulls `/*! ... */` bodies out of style and script files
//! 3. **Plan**: `plan` picks the Markdown document the file contributes to
//! 4. **Render + append**: `markdown` builds the text, a `sink` appends it
//! 5. **Follow**: with import-following on, `imports` resolves `@import`s of
//!    style files and the engine processes each one in turn
//!
//! `session` wraps a single run: entry validation, output reset, one walk.

pub mod events;
pub mod extract;
pub mod imports;
pub mod markdown;
pub mod options;
pub mod plan;
pub mod session;
pub mod sink;
pub mod source;
pub mod traverse;

pub use events::{RecordingReporter, Reporter, SilentReporter, TraversalEvent};
pub use extract::{Extraction, extract_comments};
pub use imports::resolve_imports;
pub use options::{ImportGuard, SubdirPolicy, TraversalConfig};
pub use session::run_session;
pub use sink::{DocumentSink, FsSink, MemorySink};
pub use source::{SourceFile, SourceKind};
pub use traverse::{Traversal, TraversalStats};
