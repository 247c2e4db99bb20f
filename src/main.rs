use std::env;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

mod cli;
mod exits;
mod terminal;
mod tui;

use cli::{Args, CliError, prompts, quiet};

fn main() -> ExitCode {
    env_logger::init();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args = Args::parse();
    let interactive = args.interactive || (env::args_os().len() == 1 && quiet::is_interactive());
    debug!("interactive: {interactive}");

    let result = if interactive {
        args.interactive_config()
            .map_err(CliError::from)
            .and_then(|config| tui::run(config).map_err(CliError::from))
    } else {
        cli::run(&args)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
