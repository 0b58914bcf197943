//! CLI argument definitions using clap.
//!
//! Flags are documented in their single-dash spelling (`-folder out`), which
//! [`normalize_args`] rewrites to the double-dash form clap understands.
//! Double-dash spellings are accepted as-is.

use std::{ffi::OsString, path::PathBuf};

use clap::{CommandFactory, Parser};

#[derive(Debug, Default, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// File or directory to extract banner comments from
    #[arg(value_name = "ENTRY_PATH", required_unless_present = "init")]
    pub entry_path: Option<PathBuf>,

    /// Output directory, cleared before every run [default: output]
    #[arg(long, value_name = "DIR")]
    pub folder: Option<PathBuf>,

    /// Write one Markdown file per source file instead of a combined document
    #[arg(long)]
    pub multiple: bool,

    /// Follow @import statements of SCSS/CSS files into the combined document
    #[arg(long)]
    pub scss_imports: bool,

    /// Base path or URL used to build source links
    #[arg(long, value_name = "PATH")]
    pub public_folder: Option<String>,

    /// Name of the combined document, without extension [default: docs]
    #[arg(long, value_name = "NAME")]
    pub output_file: Option<String>,

    /// Do not append a source link after each file's comments
    #[arg(long)]
    pub remove_source: bool,

    /// Skip subdirectories instead of recursing into them
    #[arg(long)]
    pub flat: bool,

    /// Process each imported file at most once (breaks import cycles)
    #[arg(long)]
    pub strict_imports: bool,

    /// Prefix every comment with a `## <file>` heading
    #[arg(long)]
    pub headings: bool,

    /// Ignore .bannerdocrc.json
    #[arg(long)]
    pub no_config: bool,

    /// Create a default .bannerdocrc.json in the current directory
    #[arg(long, conflicts_with = "entry_path")]
    pub init: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Rewrites single-dash long flags (`-folder`, `-output-file=docs`) into
/// their double-dash form. Everything else, including short flags, values
/// and arguments after `--`, passes through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let command = Arguments::command();
    let long_flags: Vec<&str> = command
        .get_arguments()
        .filter_map(|arg| arg.get_long())
        .chain(["help", "version"])
        .collect();

    let mut normalized = Vec::new();
    let mut passthrough = false;

    for (index, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if index == 0 || passthrough {
            normalized.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }

        let rewritten = arg.to_str().and_then(|s| {
            let name = s.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
            let flag = name.split_once('=').map_or(name, |(flag, _)| flag);
            long_flags.contains(&flag).then(|| format!("-{}", s))
        });

        match rewritten {
            Some(s) => normalized.push(OsString::from(s)),
            None => normalized.push(arg),
        }
    }

    normalized
}
