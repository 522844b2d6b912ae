//! Formatter, linter and test-runner invocations for the workspace.

use std::path::Path;

use crate::domain::invocation::Invocation;

/// Options for the test runner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestOptions {
    /// Show test output and per-test names.
    pub verbose: bool,
    /// Minimal output with compiler warnings silenced.
    pub minimal: bool,
}

#[must_use]
pub fn format(root: &Path) -> Invocation {
    Invocation::new("cargo").args(["fmt", "--all"]).current_dir(root)
}

/// Type check and lint in one pass; warnings fail the check.
#[must_use]
pub fn check(root: &Path) -> Invocation {
    Invocation::new("cargo")
        .args(["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"])
        .current_dir(root)
}

#[must_use]
pub fn test(root: &Path, opts: TestOptions) -> Invocation {
    let mut inv = Invocation::new("cargo")
        .args(["test", "--workspace"])
        .arg_if(opts.verbose, "--verbose")
        .arg_if(opts.minimal, "--quiet")
        .current_dir(root);
    if opts.minimal {
        inv = inv.env("RUSTFLAGS", "-Awarnings");
    }
    if opts.verbose {
        inv = inv.args(["--", "--nocapture"]);
    }
    inv
}
