//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

use crate::domain::version::Version;

// ── Version errors ────────────────────────────────────────────────────────────

/// Errors raised while reading a release tag.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error(
        "Invalid version format '{0}'. Must be vX.Y.Z where X, Y, Z are integers and 'v' letter in lowercase."
    )]
    InvalidFormat(String),

    #[error("Version segment '{segment}' in '{tag}' is too large")]
    SegmentOverflow { tag: String, segment: String },
}

// ── Publish errors ────────────────────────────────────────────────────────────

/// Errors related to publishing an image version.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PublishError {
    #[error("New version `{requested}` must be greater than the last one `{latest}`.")]
    NotNewer { requested: Version, latest: Version },
}

// ── Environment errors ────────────────────────────────────────────────────────

/// Errors related to deployment environments and infrastructure workspaces.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvironmentError {
    #[error("Invalid workspace: {name}\nValid workspaces are: {valid}")]
    Invalid { name: String, valid: String },

    #[error(
        "Terraform workspace '{name}' does not exist.\nExisting workspaces are:\n{existing}\n\
         Check if the workspace is valid and/or create it using \
         `cd infra/terraform/environment/{name} && terraform workspace new {name}`"
    )]
    WorkspaceNotInitialized { name: String, existing: String },
}

// ── Command errors ────────────────────────────────────────────────────────────

/// Errors raised when an external tool exits unsuccessfully.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("`{command}` failed with {}", exit_label(*.code))]
    Failed { command: String, code: Option<i32> },

    #[error("`{command}` failed with {}:\n{stderr}", exit_label(*.code))]
    FailedWithOutput {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_label(code: Option<i32>) -> String {
    code.map_or_else(
        || "no exit code (terminated by signal)".to_string(),
        |c| format!("exit code {c}"),
    )
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to project configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing setting {key}. Set the {key} environment variable or add it to cominty.yaml.")]
    Missing { key: &'static str },

    #[error("Setting {key} must not be empty.")]
    Empty { key: &'static str },
}
