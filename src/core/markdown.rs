//! Markdown rendering for extracted banner comments.
//!
//! Pure string building. Appending the result to a document is the job of
//! [`super::sink::DocumentSink`].

use super::{options::TraversalConfig, source::SourceFile};

/// Renders one source file's contribution to its document.
///
/// Each comment body is emitted verbatim followed by a blank line, optionally
/// preceded by a `## <stem>` heading. When source links are enabled a single
/// `**Source:**` line closes the section.
pub fn render_section(comments: &[String], source: &SourceFile, config: &TraversalConfig) -> String {
    let mut markdown = String::new();

    for comment in comments {
        if config.headings {
            markdown.push_str(&format!("## {}\n\n", source.stem()));
        }
        markdown.push_str(comment);
        markdown.push_str("\n\n");
    }

    if let Some(base) = config.source_link_base() {
        markdown.push_str(&source_link(base, &source.file_name()));
        markdown.push_str("\n\n");
    }

    markdown
}

/// `**Source:** [<name>](<base>/<name>)`
pub fn source_link(public_base: &str, file_name: &str) -> String {
    let base = public_base.trim_end_matches('/');
    format!("**Source:** [{}]({}/{})", file_name, base, file_name)
}
