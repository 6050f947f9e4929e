//! Blocking subprocess execution with inherited stdio

use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

/// Result of a subprocess execution
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Exit code as a shell would report it
    pub exit_code: i32,

    /// Execution duration
    pub duration: Duration,
}

impl CommandResult {
    /// Create a CommandResult from an exit status
    pub fn from_status(status: ExitStatus, duration: Duration) -> Self {
        Self {
            success: status.success(),
            exit_code: shell_exit_code(status),
            duration,
        }
    }
}

/// Exit code of a finished process, using `128 + signal` for processes
/// killed by a signal.
fn shell_exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// Run a command to completion, sharing this process's stdin/stdout/stderr
pub fn run_command(program: &str, args: &[String]) -> Result<CommandResult> {
    let start = Instant::now();

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to execute {}", program))?;

    Ok(CommandResult::from_status(status, start.elapsed()))
}
