//! Build tool detection
//!
//! Looks the configured build tool up in PATH before launching it so that a
//! missing toolchain produces a hint instead of a bare spawn error.

use std::path::PathBuf;

use which::which;

use crate::error::CbuildError;

/// Tool detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Tool name
    pub name: String,
    /// Path to the tool executable
    pub path: PathBuf,
}

/// Check if a tool exists and return its information
pub fn check_tool(tool_name: &str) -> Option<ToolInfo> {
    which(tool_name).ok().map(|path| ToolInfo {
        name: tool_name.to_string(),
        path,
    })
}

/// Require a tool to exist, return error with hint if missing
pub fn require_tool(tool_name: &str) -> Result<ToolInfo, CbuildError> {
    check_tool(tool_name).ok_or_else(|| CbuildError::missing_tool(tool_name))
}
