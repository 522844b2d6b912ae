//! Infrastructure implementation of the `ConfigStore` port.
//!
//! Layers, lowest precedence first: the optional YAML file, then the process
//! environment (`PROJECT_NAME`, `AWS_REGION`, `ECR_BASE_URL`, `PROJECT_ROOT`,
//! `CHAT_COMMAND`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::ConfigLayer;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_VAR: &str = "COMINTY_CONFIG";
/// File looked up in the working directory when no override is set.
pub const DEFAULT_CONFIG_FILE: &str = "cominty.yaml";

/// Production `ConfigStore`: YAML file overlaid by environment variables.
pub struct EnvConfigStore {
    cwd: PathBuf,
}

impl EnvConfigStore {
    #[must_use]
    pub fn new(cwd: PathBuf) -> Self {
        Self { cwd }
    }
}

impl ConfigStore for EnvConfigStore {
    fn load(&self) -> Result<ConfigLayer> {
        load_layers(&self.cwd, std::env::vars())
    }
}

/// Load the file layer and overlay the environment layer from `vars`.
///
/// An explicit `COMINTY_CONFIG` that does not exist is an error; a missing
/// default `cominty.yaml` is not.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if an
/// environment value has the wrong shape.
pub fn load_layers<I>(cwd: &Path, vars: I) -> Result<ConfigLayer>
where
    I: IntoIterator<Item = (String, String)>,
{
    let vars: Vec<(String, String)> = vars.into_iter().collect();
    let explicit = vars
        .iter()
        .find(|(k, _)| k == CONFIG_PATH_VAR)
        .map(|(_, v)| PathBuf::from(v));

    let file = match explicit {
        Some(path) => read_file(&path)?,
        None => {
            let path = cwd.join(DEFAULT_CONFIG_FILE);
            if path.exists() {
                read_file(&path)?
            } else {
                ConfigLayer::default()
            }
        }
    };

    let env: ConfigLayer =
        envy::from_iter(vars).context("cannot read configuration from environment")?;
    Ok(file.merge(env))
}

fn read_file(path: &Path) -> Result<ConfigLayer> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(ConfigLayer::default());
    }
    serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
}
