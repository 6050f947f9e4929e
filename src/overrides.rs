//! Build overrides and their translation into build tool flags
//!
//! Overrides come from make-style assignments on the command line
//! (`release`, `target=<name>`) and fall back to the `RELEASE` and `TARGET`
//! environment variables. Presence is what matters: an override that is
//! absent or empty contributes nothing.

use crate::error::CbuildError;

/// Flag passed to the build tool when release mode is requested
pub const RELEASE_FLAG: &str = "--release";

/// Prefix of the flag naming the build target
pub const TARGET_FLAG_PREFIX: &str = "--target=";

/// Environment variable requesting release mode
pub const RELEASE_ENV: &str = "RELEASE";

/// Environment variable naming the build target
pub const TARGET_ENV: &str = "TARGET";

/// The optional overrides supplied for a single invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideSet {
    /// Caller opted into release mode
    pub release_requested: bool,

    /// Build target name, if restricted
    pub target_override: Option<String>,
}

impl OverrideSet {
    /// Override set requesting release mode only
    #[cfg(test)]
    pub fn release() -> Self {
        Self {
            release_requested: true,
            target_override: None,
        }
    }

    /// Add a target override
    #[cfg(test)]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target_override = Some(target.into());
        self
    }

    /// Build the override set from command-line assignments, falling back to
    /// the process environment for keys the command line leaves unset.
    pub fn from_args_and_env(assignments: &[String]) -> Result<Self, CbuildError> {
        Self::from_sources(assignments, |key| std::env::var(key).ok())
    }

    /// Build the override set from command-line assignments and an
    /// environment lookup.
    ///
    /// Assignments win over the environment. A later assignment to the same
    /// key replaces an earlier one.
    pub fn from_sources<F>(assignments: &[String], env: F) -> Result<Self, CbuildError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut release: Option<bool> = None;
        let mut target: Option<Option<String>> = None;

        for assignment in assignments {
            match parse_assignment(assignment)? {
                Assignment::Release(value) => release = Some(value),
                Assignment::Target(value) => target = Some(value),
            }
        }

        let release_requested = release
            .unwrap_or_else(|| env(RELEASE_ENV).is_some_and(|value| !value.is_empty()));
        let target_override = target
            .unwrap_or_else(|| env(TARGET_ENV).filter(|value| !value.is_empty()));

        Ok(Self {
            release_requested,
            target_override,
        })
    }

    /// Whether no override is present
    pub fn is_empty(&self) -> bool {
        !self.release_requested && self.target_override.is_none()
    }

    /// Human-readable notes, one per recognized override
    pub fn recognized(&self) -> Vec<String> {
        let mut notes = Vec::new();
        if self.release_requested {
            notes.push("release mode requested".to_string());
        }
        if let Some(target) = &self.target_override {
            notes.push(format!("build target override: {}", target));
        }
        notes
    }
}

/// Translate overrides into the ordered flag list for the build tool.
///
/// The release flag, if any, always precedes the target flag.
pub fn resolve_flags(overrides: &OverrideSet) -> Vec<String> {
    let mut flags = Vec::with_capacity(2);

    if overrides.release_requested {
        flags.push(RELEASE_FLAG.to_string());
    }

    if let Some(target) = &overrides.target_override {
        flags.push(format!("{}{}", TARGET_FLAG_PREFIX, target));
    }

    flags
}

#[derive(Debug, PartialEq, Eq)]
enum Assignment {
    Release(bool),
    Target(Option<String>),
}

fn parse_assignment(raw: &str) -> Result<Assignment, CbuildError> {
    let (key, value) = match raw.split_once('=') {
        Some((key, value)) => (key, Some(value)),
        None => (raw, None),
    };

    match key.trim().to_ascii_lowercase().as_str() {
        // Bare `release` is a presence switch; `release=` clears it
        "release" => Ok(Assignment::Release(value.map_or(true, |v| !v.is_empty()))),
        "target" => match value {
            Some(v) if v.is_empty() => Ok(Assignment::Target(None)),
            Some(v) => Ok(Assignment::Target(Some(v.to_string()))),
            None => Err(CbuildError::invalid_override(
                raw,
                "'target' needs a value, as in target=<name>",
            )),
        },
        "" => Err(CbuildError::invalid_override(raw, "missing override name")),
        other => Err(CbuildError::invalid_override(
            raw,
            format!("unknown override '{}'", other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_no_overrides_resolve_to_nothing() {
        assert!(resolve_flags(&OverrideSet::default()).is_empty());
    }

    #[test]
    fn test_release_only() {
        assert_eq!(resolve_flags(&OverrideSet::release()), vec!["--release"]);
    }

    #[test]
    fn test_target_only_forwards_name() {
        let overrides = OverrideSet::default().with_target("foo");
        assert_eq!(resolve_flags(&overrides), vec!["--target=foo"]);
    }

    #[test]
    fn test_release_precedes_target() {
        let overrides = OverrideSet::release().with_target("foo");
        assert_eq!(
            resolve_flags(&overrides),
            vec!["--release", "--target=foo"]
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let overrides = OverrideSet::release().with_target("x86_64-unknown-linux-musl");
        let first = resolve_flags(&overrides);
        for _ in 0..10 {
            assert_eq!(resolve_flags(&overrides), first);
        }
    }

    #[test]
    fn test_parse_assignments() {
        let set = OverrideSet::from_sources(&args(&["release", "target=foo"]), no_env).unwrap();
        assert_eq!(set, OverrideSet::release().with_target("foo"));

        let set = OverrideSet::from_sources(&args(&["RELEASE=1", "Target=bar"]), no_env).unwrap();
        assert_eq!(set, OverrideSet::release().with_target("bar"));

        let set = OverrideSet::from_sources(&args(&["release=", "target="]), no_env).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_later_assignment_wins() {
        let set = OverrideSet::from_sources(
            &args(&["target=a", "release", "target=b", "release="]),
            no_env,
        )
        .unwrap();
        assert_eq!(set, OverrideSet::default().with_target("b"));
    }

    #[test]
    fn test_environment_fallback() {
        let env: HashMap<&str, &str> = [("RELEASE", "1"), ("TARGET", "wasm32-unknown-unknown")]
            .into_iter()
            .collect();
        let lookup = |key: &str| env.get(key).map(|v| v.to_string());

        let set = OverrideSet::from_sources(&[], lookup).unwrap();
        assert_eq!(
            set,
            OverrideSet::release().with_target("wasm32-unknown-unknown")
        );

        // Command line takes precedence, including explicit clearing
        let set = OverrideSet::from_sources(&args(&["release=", "target=foo"]), lookup).unwrap();
        assert_eq!(set, OverrideSet::default().with_target("foo"));
    }

    #[test]
    fn test_empty_environment_values_are_absent() {
        let lookup = |_: &str| Some(String::new());
        let set = OverrideSet::from_sources(&[], lookup).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = OverrideSet::from_sources(&args(&["profile=dev"]), no_env).unwrap_err();
        assert!(err.to_string().contains("unknown override 'profile'"));
    }

    #[test]
    fn test_target_without_value_is_rejected() {
        let err = OverrideSet::from_sources(&args(&["target"]), no_env).unwrap_err();
        assert!(matches!(err, CbuildError::InvalidOverride { .. }));
    }

    #[test]
    fn test_recognized_notes() {
        assert!(OverrideSet::default().recognized().is_empty());
        assert_eq!(
            OverrideSet::release().with_target("foo").recognized(),
            vec!["release mode requested", "build target override: foo"]
        );
    }
}
