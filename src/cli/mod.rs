use anyhow::Result;

use crate::config::CONFIG_FILE_NAME;

pub use self::args::{Arguments, normalize_args};
pub use self::exit_status::ExitStatus;
pub use self::run::{RunOutcome, build_config};

mod args;
mod exit_status;
pub mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let quiet = args.quiet;

    match run::run(&args)? {
        RunOutcome::Initialized => {
            println!("{} Created {}", report::SUCCESS_MARK, CONFIG_FILE_NAME);
        }
        RunOutcome::Extracted(stats) => {
            if !quiet {
                report::print_summary(&stats);
            }
        }
    }

    Ok(ExitStatus::Success)
}
