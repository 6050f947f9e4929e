//! Project configuration from `cbuild.toml`
//!
//! ```toml
//! [tool]
//! program = "cargo"
//! ```
//!
//! The file is optional. It is looked up from the current directory upward.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CbuildError;

/// Configuration file name
pub const CONFIG_FILE: &str = "cbuild.toml";

/// Parsed `cbuild.toml`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CbuildConfig {
    #[serde(default)]
    pub tool: ToolConfig,
}

/// The `[tool]` section
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Build tool executable
    pub program: Option<String>,
}

impl CbuildConfig {
    /// Load the nearest `cbuild.toml` above `start_dir`, or defaults if none
    pub fn discover(start_dir: &Path) -> Result<Self, CbuildError> {
        match Self::find_config(start_dir) {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, CbuildError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CbuildError::config_error(path, "failed to read file", Some(e.into()))
        })?;

        Self::parse(&content)
            .map_err(|e| CbuildError::config_error(path, "failed to parse file", Some(e.into())))
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Find `cbuild.toml` by searching up from `start_dir`
    pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
        start_dir
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE))
            .find(|path| path.is_file())
    }
}
