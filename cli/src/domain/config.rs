//! Project configuration schema and resolution.
//!
//! Pure functions only: no I/O, no async, no filesystem access. Loading the
//! file and environment layers lives in `crate::infra::config`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::error::ConfigError;

/// One configuration layer. Every field is optional so layers can be merged;
/// the YAML file and the environment both deserialize into this shape.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConfigLayer {
    pub project_name: Option<String>,
    pub aws_region: Option<String>,
    pub ecr_base_url: Option<String>,
    pub project_root: Option<PathBuf>,
    pub chat_command: Option<String>,
}

impl ConfigLayer {
    /// Overlay `other` on top of `self`; values present in `other` win.
    #[must_use]
    pub fn merge(self, other: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            project_name: other.project_name.or(self.project_name),
            aws_region: other.aws_region.or(self.aws_region),
            ecr_base_url: other.ecr_base_url.or(self.ecr_base_url),
            project_root: other.project_root.or(self.project_root),
            chat_command: other.chat_command.or(self.chat_command),
        }
    }

    /// Project root on its own, for commands that never touch the registry.
    #[must_use]
    pub fn root(&self, cwd: &Path) -> PathBuf {
        match &self.project_root {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => cwd.join(root),
            None => cwd.to_path_buf(),
        }
    }

    /// Resolve into a complete configuration.
    ///
    /// A relative `project_root` is taken relative to `cwd`; a missing one
    /// defaults to `cwd`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required key is missing or empty.
    pub fn resolve(self, cwd: &Path) -> Result<ProjectConfig, ConfigError> {
        let project_root = self.root(cwd);
        Ok(ProjectConfig {
            project_name: required(self.project_name, "PROJECT_NAME")?,
            aws_region: required(self.aws_region, "AWS_REGION")?,
            ecr_base_url: required(self.ecr_base_url, "ECR_BASE_URL")?
                .trim_end_matches('/')
                .to_string(),
            project_root,
            chat_command: self.chat_command.filter(|c| !c.trim().is_empty()),
        })
    }
}

fn required(value: Option<String>, key: &'static str) -> Result<String, ConfigError> {
    match value {
        None => Err(ConfigError::Missing { key }),
        Some(v) if v.trim().is_empty() => Err(ConfigError::Empty { key }),
        Some(v) => Ok(v.trim().to_string()),
    }
}

/// Fully resolved project configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Image and registry repository name.
    pub project_name: String,
    pub aws_region: String,
    /// Registry host, e.g. `123456789012.dkr.ecr.eu-west-1.amazonaws.com`.
    pub ecr_base_url: String,
    /// Root of the repository; every command runs relative to it.
    pub project_root: PathBuf,
    /// Container command override for `chat`, split on whitespace.
    pub chat_command: Option<String>,
}

impl ProjectConfig {
    /// Local image reference, `<project>:latest`.
    #[must_use]
    pub fn local_image(&self) -> String {
        format!("{}:latest", self.project_name)
    }

    /// Remote image reference for `tag`, `<registry>/<project>:<tag>`.
    #[must_use]
    pub fn remote_image(&self, tag: &str) -> String {
        format!("{}/{}:{tag}", self.ecr_base_url, self.project_name)
    }
}
