//! Console output for extraction runs.
//!
//! Kept out of the core so bannerdoc can be used as a library without
//! printing side effects.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{Reporter, TraversalEvent, TraversalStats, source::file_stem};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Prints traversal events as colored status lines.
pub struct ConsoleReporter<W: Write> {
    writer: W,
    verbose: bool,
    quiet: bool,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(verbose: bool, quiet: bool) -> Self {
        Self::new(io::stdout(), verbose, quiet)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(writer: W, verbose: bool, quiet: bool) -> Self {
        Self {
            writer,
            verbose,
            quiet,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, event: &TraversalEvent) {
        if self.quiet && !is_warning(event) {
            return;
        }
        if let Some(line) = format_event(event, self.verbose) {
            let _ = writeln!(self.writer, "{}", line);
        }
    }
}

fn is_warning(event: &TraversalEvent) -> bool {
    matches!(event, TraversalEvent::ImportRevisited { .. })
}

/// Renders one event, or `None` when it is only shown in verbose mode.
pub fn format_event(event: &TraversalEvent, verbose: bool) -> Option<String> {
    let line = match event {
        TraversalEvent::NoComments { source } => format!(
            "'{}' doesn't have comments to extract.",
            file_stem(source)
        )
        .yellow()
        .to_string(),
        TraversalEvent::AddedToDocument { source, .. } => format!(
            "'{}' added to Markdown file successfully.",
            file_stem(source)
        )
        .green()
        .to_string(),
        TraversalEvent::DocumentUpdated { target, .. } => format!(
            "Markdown file '{}' updated successfully.",
            target.display()
        )
        .green()
        .to_string(),
        TraversalEvent::SkippedDirectory { path } => {
            format!("Skipping directory '{}'.", path.display())
                .yellow()
                .to_string()
        }
        TraversalEvent::ImportRevisited { path } => format!(
            "{} '{}' was already imported, skipping.",
            "warning:".bold().yellow(),
            path.display()
        ),
        TraversalEvent::NotApplicable { source } if verbose => {
            format!("Skipping unsupported file '{}'.", source.display())
                .dimmed()
                .to_string()
        }
        TraversalEvent::Ignored { path } if verbose => {
            format!("Ignoring '{}'.", path.display()).dimmed().to_string()
        }
        TraversalEvent::NotApplicable { .. } | TraversalEvent::Ignored { .. } => return None,
    };
    Some(line)
}

/// Print the end-of-run summary to stdout.
pub fn print_summary(stats: &TraversalStats) {
    print_summary_to(stats, &mut io::stdout().lock());
}

/// Print the end-of-run summary to a custom writer.
pub fn print_summary_to<W: Write>(stats: &TraversalStats, writer: &mut W) {
    let files = plural(stats.files_visited, "file", "files");
    let msg = if stats.documents.is_empty() {
        format!("No banner comments found in {}", files)
            .yellow()
            .to_string()
    } else {
        format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Extracted {} from {} into {}",
                plural(stats.comments_written, "comment", "comments"),
                files,
                plural(stats.documents.len(), "document", "documents")
            )
            .green()
        )
    };
    let _ = writeln!(writer, "{}", msg);
}

/// Print an error, with its context chain, to stderr.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "error:".bold().red(), err);
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}
