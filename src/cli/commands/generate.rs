use anyhow::{Context, Result};

use super::super::args::GenerateArgs;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_event, print_no_imports, print_summary};
use crate::config::load_config;
use crate::core::generate as generate_binstubs;
use crate::error::BinstubError;

pub fn generate(args: GenerateArgs, verbose: bool) -> Result<ExitStatus> {
    let GenerateArgs {
        common,
        input,
        output_dir,
    } = args;

    let start_dir = common
        .path
        .canonicalize()
        .with_context(|| format!("Project directory not found: {}", common.path.display()))?;
    let loaded = load_config(&start_dir)?;
    if verbose && loaded.from_file {
        eprintln!("Using config from {}", loaded.root.display());
    }
    let options = loaded.into_generate_options(input, output_dir);

    match generate_binstubs(&options, |event| print_event(event, verbose)) {
        Ok(summary) => {
            if verbose {
                print_summary(&summary);
            }
            Ok(ExitStatus::Success)
        }
        Err(err @ BinstubError::NoDeclarationsFound { .. }) => {
            print_no_imports(&err);
            Ok(ExitStatus::Failure)
        }
        Err(err) => Err(err.into()),
    }
}
