//! Error types and helpers for user-friendly error messages
//!
//! Every variant carries a hint so that the user knows what to do next.

use std::path::PathBuf;

use thiserror::Error;

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum CbuildError {
    /// A build override on the command line could not be understood
    #[error("Invalid override '{assignment}': {message}")]
    InvalidOverride {
        assignment: String,
        message: String,
        hint: String,
    },

    /// Build tool executable not found
    #[error("Missing tool: {tool}")]
    MissingTool { tool: String, hint: String },

    /// Configuration file errors
    #[error("Configuration error in {}: {message}", .path.display())]
    Config {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        hint: String,
    },
}

impl CbuildError {
    /// Create an invalid override error
    pub fn invalid_override(assignment: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOverride {
            assignment: assignment.into(),
            message: message.into(),
            hint: hints::overrides().to_string(),
        }
    }

    /// Create a missing tool error
    pub fn missing_tool(tool: impl Into<String>) -> Self {
        let tool = tool.into();
        let hint = hints::build_tool(&tool);
        Self::MissingTool { tool, hint }
    }

    /// Create a configuration error with its underlying cause
    pub fn config_error(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
            source,
            hint: hints::invalid_config().to_string(),
        }
    }

    /// Exit code reported to the shell for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            // Same code clap uses for usage errors
            CbuildError::InvalidOverride { .. } => 2,
            CbuildError::MissingTool { .. } | CbuildError::Config { .. } => 1,
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        if let CbuildError::Config {
            source: Some(source),
            ..
        } = self
        {
            eprintln!("  caused by: {:#}", source);
        }

        let hint = match self {
            CbuildError::InvalidOverride { hint, .. }
            | CbuildError::MissingTool { hint, .. }
            | CbuildError::Config { hint, .. } => hint,
        };
        eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);

        eprintln!();
    }
}

/// Common error hints
pub mod hints {
    /// Get hint for a malformed override
    pub fn overrides() -> &'static str {
        "Recognized overrides:\n\
         • release            build in release mode (also RELEASE=1 in the environment)\n\
         • target=<name>      build for <name> (also TARGET=<name> in the environment)\n\
         \n\
         Run: cbuild help"
    }

    /// Get hint for a build tool that is not on PATH
    pub fn build_tool(tool: &str) -> String {
        if tool == "cargo" {
            "Install the Rust toolchain from https://rustup.rs/ and make sure\n\
             ~/.cargo/bin is in your PATH."
                .to_string()
        } else {
            format!(
                "Could not find '{}' in PATH.\n\
                 • Pass --tool <PROGRAM> or set CBUILD_TOOL\n\
                 • Or set [tool] program in cbuild.toml",
                tool
            )
        }
    }

    /// Get hint for an invalid cbuild.toml
    pub fn invalid_config() -> &'static str {
        "cbuild.toml is invalid. The only supported section is:\n\
         \n\
         [tool]\n\
         program = \"cargo\""
    }
}
