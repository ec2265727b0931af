mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, list, walkthrough};
use netstr_common::config::Config;
use terminal::logging;
use tracing::error;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    if let Err(err) = logging::init_logging(commands.verbose) {
        eprintln!("failed to set up logging: {err:#}");
        return ExitCode::FAILURE;
    }
    if commands.plain {
        colored::control::set_override(false);
    }

    let cfg = Config {
        quiet: commands.quiet,
        plain: commands.plain,
        steps: commands.steps,
    };

    let result = if commands.list {
        list::list(&cfg);
        Ok(())
    } else {
        walkthrough::walkthrough(&cfg)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
