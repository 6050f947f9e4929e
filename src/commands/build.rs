//! Build command implementation

use std::io;

use anyhow::{Context, Result};
use clap::Args;

use crate::config::CbuildConfig;
use crate::dispatch::{dispatch, Operation};
use crate::exec::tool::DEFAULT_PROGRAM;
use crate::exec::ExternalTool;
use crate::overrides::{resolve_flags, OverrideSet};
use crate::utils::terminal;

/// Run the build tool with flags resolved from the overrides
#[derive(Args, Debug)]
pub struct BuildCommand {
    /// Build overrides: `release` and/or `target=<name>`
    ///
    /// Falls back to the RELEASE and TARGET environment variables for
    /// overrides not given here.
    #[arg(value_name = "OVERRIDE")]
    pub overrides: Vec<String>,

    /// Build tool program [default: cargo, or [tool] program in cbuild.toml]
    #[arg(long, env = "CBUILD_TOOL", value_name = "PROGRAM")]
    pub tool: Option<String>,
}

impl BuildCommand {
    /// Execute the build command, returning the build tool's exit code
    pub fn execute(self, verbose: bool) -> Result<i32> {
        let overrides = OverrideSet::from_args_and_env(&self.overrides)?;
        for note in overrides.recognized() {
            terminal::print_info(&note);
        }
        if verbose && overrides.is_empty() {
            terminal::print_info("no overrides, building with tool defaults");
        }

        let flags = resolve_flags(&overrides);
        let tool = ExternalTool::new(self.resolve_program()?, verbose);

        dispatch(Operation::Build, &flags, &tool, &mut io::stdout())
    }

    /// Build tool program: command line or environment, then cbuild.toml,
    /// then the default
    fn resolve_program(&self) -> Result<String> {
        if let Some(program) = &self.tool {
            return Ok(program.clone());
        }

        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let config = CbuildConfig::discover(&cwd)?;
        Ok(config
            .tool
            .program
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string()))
    }
}
