//! Operation dispatch
//!
//! Each invocation runs exactly one operation: a build through the external
//! tool, or the usage line.

use std::io::{ErrorKind, Write};

use anyhow::Result;

use crate::exec::BuildTool;
use crate::utils::terminal;

/// Single-line usage text printed by `help`
pub const USAGE: &str = "usage: cbuild build [release] [target=<name>] \
    (release or RELEASE=1 adds --release; target=<name> or TARGET=<name> adds --target=<name>)";

/// The supported operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Build,
    Help,
}

/// Run `operation` and return the exit code for the process.
///
/// `flags` is only used by `build`, where it is handed to the tool verbatim.
/// The tool's exit code is returned unchanged. `help` always returns 0, even
/// when the usage line cannot be written.
pub fn dispatch<W: Write>(
    operation: Operation,
    flags: &[String],
    tool: &dyn BuildTool,
    out: &mut W,
) -> Result<i32> {
    match operation {
        Operation::Build => tool.build(flags),
        Operation::Help => {
            match writeln!(out, "{}", USAGE).and_then(|_| out.flush()) {
                Ok(()) => {}
                // Reader went away, as in `cbuild help | head -c0`
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
                Err(e) => terminal::print_warning(&format!("could not print usage: {}", e)),
            }
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every build request and answers with a fixed exit code
    struct RecordingTool {
        calls: RefCell<Vec<Vec<String>>>,
        exit_code: i32,
    }

    impl RecordingTool {
        fn new(exit_code: i32) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                exit_code,
            }
        }
    }

    impl BuildTool for RecordingTool {
        fn build(&self, flags: &[String]) -> Result<i32> {
            self.calls.borrow_mut().push(flags.to_vec());
            Ok(self.exit_code)
        }
    }

    fn flags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_help_never_builds() {
        let tool = RecordingTool::new(101);
        let mut out = Vec::new();

        let code = dispatch(
            Operation::Help,
            &flags(&["--release", "--target=foo"]),
            &tool,
            &mut out,
        )
        .unwrap();

        assert_eq!(code, 0);
        assert!(tool.calls.borrow().is_empty());
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("{}\n", USAGE));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_build_with_no_flags() {
        let tool = RecordingTool::new(0);
        let mut out = Vec::new();

        let code = dispatch(Operation::Build, &[], &tool, &mut out).unwrap();

        assert_eq!(code, 0);
        assert_eq!(*tool.calls.borrow(), vec![Vec::<String>::new()]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_build_passes_flags_in_order() {
        let tool = RecordingTool::new(0);
        let resolved = flags(&["--release", "--target=foo"]);

        dispatch(Operation::Build, &resolved, &tool, &mut Vec::new()).unwrap();

        assert_eq!(*tool.calls.borrow(), vec![resolved]);
    }

    #[test]
    fn test_build_exit_code_propagates() {
        let tool = RecordingTool::new(101);
        let code = dispatch(Operation::Build, &[], &tool, &mut Vec::new()).unwrap();
        assert_eq!(code, 101);
        assert_eq!(tool.calls.borrow().len(), 1);
    }

    #[test]
    fn test_usage_mentions_both_overrides() {
        assert!(USAGE.contains("release"));
        assert!(USAGE.contains("target=<name>"));
        assert!(!USAGE.contains('\n'));
    }

    /// Writer whose every write fails with the given kind
    struct FailingWriter(ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(self.0))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::from(self.0))
        }
    }

    #[test]
    fn test_help_succeeds_when_output_fails() {
        for kind in [ErrorKind::BrokenPipe, ErrorKind::Other, ErrorKind::WriteZero] {
            let tool = RecordingTool::new(101);
            let code = dispatch(Operation::Help, &[], &tool, &mut FailingWriter(kind)).unwrap();
            assert_eq!(code, 0, "{kind:?}");
            assert!(tool.calls.borrow().is_empty());
        }
    }
}
