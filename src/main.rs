use std::process::ExitCode;

use bannerdoc::cli::{Arguments, ExitStatus, normalize_args, report};
use clap::Parser;

fn main() -> ExitCode {
    let args = Arguments::parse_from(normalize_args(std::env::args_os()));

    match bannerdoc::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            report::print_error(&err);
            ExitStatus::from(&err).into()
        }
    }
}
