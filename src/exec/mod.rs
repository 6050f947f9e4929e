//! Process execution

pub mod subprocess;
pub mod tool;

pub use tool::{BuildTool, ExternalTool, NoTool};
