use currm_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; the file log is best-effort.
    let target = logging::init();
    tracing::debug!(?target, "logging ready");

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("currm error: {:#}", err);
        std::process::exit(1);
    }
}
