//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{build::BuildCommand, help::HelpCommand};
use crate::utils::terminal;

/// cbuild - a minimal build front-end
///
/// Turns `release` and `target=<name>` overrides into build tool flags.
#[derive(Parser, Debug)]
#[command(name = "cbuild")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build with the resolved overrides
    Build(BuildCommand),

    /// Print usage for the build overrides
    Help(HelpCommand),
}

impl Cli {
    /// Execute the CLI command, returning the process exit code
    pub fn execute(self) -> Result<i32> {
        if self.no_color {
            terminal::disable_colors();
        }

        match self.command {
            Commands::Build(cmd) => cmd.execute(self.verbose),
            Commands::Help(cmd) => cmd.execute(self.verbose),
        }
    }
}
