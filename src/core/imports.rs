//! `@import` resolution for style files.

use std::{
    path::{Component, Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;

// Matches: @import "path";  and  @import 'path';
static IMPORT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"@import\s+(?:"([^"]+)"|'([^']+)');"#).unwrap());

/// Resolves every quoted `@import` in `content` against `dir`, in
/// declaration order. Targets are not checked for existence.
pub fn resolve_imports(content: &str, dir: &Path) -> Vec<PathBuf> {
    IMPORT_REGEX
        .captures_iter(content)
        .filter_map(|cap| cap.get(1).or_else(|| cap.get(2)))
        .map(|m| normalize_path(&dir.join(m.as_str())))
        .collect()
}

/// Lexically removes `.` and `..` components without touching the disk.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(Component::ParentDir),
            },
            other => normalized.push(other),
        }
    }
    normalized
}
