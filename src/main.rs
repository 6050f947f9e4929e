//! cbuild - a minimal build front-end
//!
//! Resolves `release` / `target=<name>` overrides (or the `RELEASE` and
//! `TARGET` environment variables) into flags and hands them to the build
//! tool.
//!
//! ```text
//! cbuild build release target=foo  →  cargo build --release --target=foo
//! ```

mod cli;
mod commands;
mod config;
mod dispatch;
mod error;
mod exec;
mod overrides;
mod utils;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use error::CbuildError;
use utils::terminal;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.execute() {
        Ok(code) => ExitCode::from(exit_status_byte(code)),
        Err(err) => match err.downcast_ref::<CbuildError>() {
            Some(e) => {
                e.display_with_hints();
                ExitCode::from(e.exit_code())
            }
            None => {
                terminal::print_error(&format!("{:#}", err));
                ExitCode::FAILURE
            }
        },
    }
}

/// Codes that do not fit a process exit status are reported as 1
fn exit_status_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
