use navmenu_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; stdout carries command output.
    if let Err(err) = logging::init_logging() {
        match logging::init_logging_stderr() {
            Ok(()) => tracing::warn!("file logging unavailable, using stderr: {:#}", err),
            Err(stderr_err) => eprintln!(
                "navmenu: logging disabled: {:#}; {:#}",
                err, stderr_err
            ),
        }
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("navmenu error: {:#}", err);
        std::process::exit(1);
    }
}
