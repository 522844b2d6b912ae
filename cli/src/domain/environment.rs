//! Deployment environments and Terraform workspace list parsing.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::EnvironmentError;

/// A named deployment target. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Dev,
    Staging,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 3] = [Self::Dev, Self::Staging, Self::Production];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    /// Comma-separated list of every valid name.
    #[must_use]
    pub fn valid_names() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl FromStr for Environment {
    type Err = EnvironmentError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|env| env.as_str() == name)
            .ok_or_else(|| EnvironmentError::Invalid {
                name: name.to_string(),
                valid: Self::valid_names(),
            })
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[must_use]
pub fn is_valid_environment(name: &str) -> bool {
    name.parse::<Environment>().is_ok()
}

/// Parse the output of `terraform workspace list`.
///
/// One workspace per line; the active one carries a leading `*` marker.
/// This is text scraping: the CLI offers no structured form of this list.
#[must_use]
pub fn parse_workspace_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(|line| line.trim().trim_start_matches('*').trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Require `env` to already exist among `existing` workspaces.
///
/// # Errors
///
/// Returns [`EnvironmentError::WorkspaceNotInitialized`] listing `existing`.
pub fn ensure_workspace_initialized(
    env: Environment,
    existing: &[String],
) -> Result<(), EnvironmentError> {
    if existing.iter().any(|w| w == env.as_str()) {
        return Ok(());
    }
    let listing = existing
        .iter()
        .map(|w| format!("  - {w}"))
        .collect::<Vec<_>>()
        .join("\n");
    Err(EnvironmentError::WorkspaceNotInitialized {
        name: env.as_str().to_string(),
        existing: listing,
    })
}
