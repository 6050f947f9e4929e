//! The external build tool

use anyhow::{bail, Result};

use super::subprocess::run_command;
use crate::utils::terminal;
use crate::utils::tools::require_tool;

/// Subcommand used for the build entry point, as in `cargo build`
pub const BUILD_SUBCOMMAND: &str = "build";

/// Default build tool program
pub const DEFAULT_PROGRAM: &str = "cargo";

/// An external tool exposing a build entry point
pub trait BuildTool {
    /// Run a build with `flags` appended as trailing arguments and return the
    /// tool's exit code.
    fn build(&self, flags: &[String]) -> Result<i32>;
}

/// Stand-in for operations that never build
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTool;

impl BuildTool for NoTool {
    fn build(&self, _flags: &[String]) -> Result<i32> {
        bail!("no build tool is available for this operation")
    }
}

/// A build tool launched as a child process: `<program> build <flags...>`
#[derive(Debug, Clone)]
pub struct ExternalTool {
    program: String,
    verbose: bool,
}

impl ExternalTool {
    pub fn new(program: impl Into<String>, verbose: bool) -> Self {
        Self {
            program: program.into(),
            verbose,
        }
    }

    /// Full argument list passed to the program
    pub fn build_args(flags: &[String]) -> Vec<String> {
        std::iter::once(BUILD_SUBCOMMAND.to_string())
            .chain(flags.iter().cloned())
            .collect()
    }
}

impl BuildTool for ExternalTool {
    fn build(&self, flags: &[String]) -> Result<i32> {
        let tool = require_tool(&self.program)?;
        let args = Self::build_args(flags);

        if self.verbose {
            terminal::print_info(&format!("running: {} {}", tool.path.display(), args.join(" ")));
        }

        let result = run_command(&self.program, &args)?;

        if self.verbose {
            let elapsed = result.duration.as_secs_f64();
            if result.success {
                terminal::print_success(&format!("{} finished in {:.2}s", tool.name, elapsed));
            } else {
                terminal::print_warning(&format!(
                    "{} exited with code {} after {:.2}s",
                    tool.name, result.exit_code, elapsed
                ));
            }
        }

        Ok(result.exit_code)
    }
}
