use std::path::{Path, PathBuf};

use super::{options::TraversalConfig, source::file_stem};

/// Markdown document a source file contributes to.
///
/// Consolidated runs share `<output_dir>/<output_file>.md`. Otherwise each
/// source gets `<output_dir>/<stem>.md`; sources with the same stem in
/// different directories share a document.
pub fn output_target(config: &TraversalConfig, source: &Path, consolidated: bool) -> PathBuf {
    let name = if consolidated {
        config.output_file.clone()
    } else {
        file_stem(source)
    };
    config.output_dir.join(format!("{}.md", name))
}
