//! Command-line interface layer.

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;

pub use args::{Arguments, Command, CommonArgs, GenerateArgs, InitCommand};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    match args.command {
        Some(Command::Init(cmd)) => commands::init::init(cmd),
        None => commands::generate::generate(args.generate, verbose),
    }
}
