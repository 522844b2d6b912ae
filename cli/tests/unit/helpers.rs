//! Shared test helpers: recording port fakes and output constructors.

#![allow(dead_code, clippy::expect_used)]

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};
use std::sync::Mutex;

use anyhow::Result;
use cominty_cli::application::ports::{
    CommandRunner, ImageRegistry, LinkManager, ProgressReporter, UserPrompt,
};
use cominty_cli::domain::{Invocation, ProjectConfig};

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success, non-zero = failure).
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15, so we shift.
/// On Windows `ExitStatusExt::from_raw` takes the exit code directly.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

// ── Output constructors ──────────────────────────────────────────────────────

pub fn ok_output(stdout: &[u8]) -> Output {
    Output {
        status: exit_status(0),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

pub fn err_output(code: i32, stderr: &[u8]) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: stderr.to_vec(),
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn project(root: &Path) -> ProjectConfig {
    ProjectConfig {
        project_name: "cominty".to_string(),
        aws_region: "eu-west-1".to_string(),
        ecr_base_url: "123.dkr.ecr.eu-west-1.amazonaws.com".to_string(),
        project_root: root.to_path_buf(),
        chat_command: None,
    }
}

// ── Command runner ───────────────────────────────────────────────────────────

/// How the runner was asked to execute a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Captured,
    Status,
}

/// One recorded call.
#[derive(Debug, Clone)]
pub struct Call {
    pub mode: Mode,
    pub cmd: Invocation,
    pub stdin: Option<Vec<u8>>,
}

type Respond = Box<dyn Fn(&Invocation) -> Output>;

/// Records every invocation; answers from a closure (default: success, empty
/// stdout).
pub struct RecordingRunner {
    respond: Respond,
    calls: Mutex<Vec<Call>>,
}

impl RecordingRunner {
    pub fn ok() -> Self {
        Self::with(|_| ok_output(b""))
    }

    pub fn with(respond: impl Fn(&Invocation) -> Output + 'static) -> Self {
        Self {
            respond: Box::new(respond),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("lock").clone()
    }

    /// Every call rendered as `program arg arg...`.
    pub fn lines(&self) -> Vec<String> {
        self.calls().iter().map(|c| c.cmd.to_string()).collect()
    }

    fn record(&self, mode: Mode, cmd: &Invocation, stdin: Option<&[u8]>) -> Output {
        self.calls.lock().expect("lock").push(Call {
            mode,
            cmd: cmd.clone(),
            stdin: stdin.map(<[u8]>::to_vec),
        });
        (self.respond)(cmd)
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, cmd: &Invocation) -> Result<Output> {
        Ok(self.record(Mode::Captured, cmd, None))
    }

    async fn run_with_stdin(&self, cmd: &Invocation, input: &[u8]) -> Result<Output> {
        Ok(self.record(Mode::Captured, cmd, Some(input)))
    }

    async fn run_status(&self, cmd: &Invocation) -> Result<ExitStatus> {
        Ok(self.record(Mode::Status, cmd, None).status)
    }
}

// ── Links ────────────────────────────────────────────────────────────────────

/// Records requested symlinks without touching the filesystem.
#[derive(Default)]
pub struct RecordingLinks {
    links: Mutex<Vec<(PathBuf, PathBuf)>>,
}

impl RecordingLinks {
    pub fn links(&self) -> Vec<(PathBuf, PathBuf)> {
        self.links.lock().expect("lock").clone()
    }
}

impl LinkManager for RecordingLinks {
    fn ensure_symlink(&self, target: &Path, link: &Path) -> Result<()> {
        self.links
            .lock()
            .expect("lock")
            .push((target.to_path_buf(), link.to_path_buf()));
        Ok(())
    }
}

// ── Registry ─────────────────────────────────────────────────────────────────

/// Registry returning a fixed tag list.
pub struct FakeRegistry {
    pub tags: Vec<String>,
}

impl FakeRegistry {
    pub fn with_tags(tags: &[&str]) -> Self {
        Self {
            tags: tags.iter().map(ToString::to_string).collect(),
        }
    }
}

impl ImageRegistry for FakeRegistry {
    async fn image_tags(&self, _repository: &str) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }
}

// ── Prompt ───────────────────────────────────────────────────────────────────

/// Prompt with a fixed answer that records the questions asked.
pub struct FixedPrompt {
    answer: bool,
    asked: Mutex<Vec<String>>,
}

impl FixedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().expect("lock").clone()
    }
}

impl UserPrompt for FixedPrompt {
    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        self.asked.lock().expect("lock").push(prompt.to_string());
        Ok(self.answer)
    }
}

// ── Reporter ─────────────────────────────────────────────────────────────────

/// Collects reporter messages prefixed with their level.
#[derive(Default)]
pub struct RecordingReporter {
    messages: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("lock").clone()
    }

    fn push(&self, level: &str, message: &str) {
        self.messages
            .lock()
            .expect("lock")
            .push(format!("{level}: {message}"));
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.push("step", message);
    }
    fn success(&self, message: &str) {
        self.push("success", message);
    }
    fn warn(&self, message: &str) {
        self.push("warn", message);
    }
}
