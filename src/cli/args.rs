//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - (none): Generate binstubs from `tools.go` into `bin/`
//! - `init`: Write a default `.binstubsrc.json`

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

impl Arguments {
    /// Get the verbose flag for the selected command.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Init(_)) => false,
            None => self.generate.common.verbose,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project directory (config file search starts here)
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// File to scan for blank imports (overrides config file)
    #[arg(long, env = "BINSTUBS_INPUT")]
    pub input: Option<PathBuf>,

    /// Directory to write binstubs to (overrides config file)
    #[arg(long, env = "BINSTUBS_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to create the config file in
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .binstubsrc.json configuration file
    Init(InitCommand),
}
