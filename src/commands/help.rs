//! Help command implementation

use std::io;

use anyhow::Result;
use clap::Args;

use crate::dispatch::{dispatch, Operation};
use crate::exec::NoTool;

/// Print usage for the build overrides
#[derive(Args, Debug)]
pub struct HelpCommand {}

impl HelpCommand {
    /// Execute the help command; always exits 0
    pub fn execute(self, _verbose: bool) -> Result<i32> {
        dispatch(Operation::Help, &[], &NoTool, &mut io::stdout())
    }
}
