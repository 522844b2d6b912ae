//! Terraform file layout and invocations.
//!
//! Every invocation runs with the environment's workspace directory as its
//! working directory, since Terraform resolves its state relative to it.

use std::path::{Path, PathBuf};

use crate::domain::environment::Environment;
use crate::domain::invocation::Invocation;

/// How `terraform init` treats existing backend state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InitMode {
    /// Plain `terraform init`.
    #[default]
    Plain,
    /// `-migrate-state`, or `-reconfigure` when requested, optionally `-upgrade`.
    Backend { reconfigure: bool, upgrade: bool },
}

/// Paths under `<root>/infra/terraform` for one environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerraformLayout {
    infra_dir: PathBuf,
    env: Environment,
}

impl TerraformLayout {
    #[must_use]
    pub fn new(project_root: &Path, env: Environment) -> Self {
        Self {
            infra_dir: project_root.join("infra").join("terraform"),
            env,
        }
    }

    #[must_use]
    pub fn env(&self) -> Environment {
        self.env
    }

    #[must_use]
    pub fn workspace_dir(&self) -> PathBuf {
        self.infra_dir.join("environment").join(self.env.as_str())
    }

    /// Settings file shared by every environment.
    #[must_use]
    pub fn global_settings(&self) -> PathBuf {
        self.infra_dir.join("config").join("global").join("settings.tf")
    }

    /// Symlink inside the workspace pointing at [`Self::global_settings`].
    #[must_use]
    pub fn settings_link(&self) -> PathBuf {
        self.workspace_dir().join("settings.tf")
    }

    #[must_use]
    pub fn var_file(&self) -> PathBuf {
        self.env_config_dir().join(format!("{}.tfvars", self.env))
    }

    #[must_use]
    pub fn secrets_var_file(&self) -> PathBuf {
        self.env_config_dir().join(format!("{}.secrets.tfvars", self.env))
    }

    fn env_config_dir(&self) -> PathBuf {
        self.infra_dir.join("config").join("environment")
    }

    fn terraform(&self) -> Invocation {
        Invocation::new("terraform").current_dir(self.workspace_dir())
    }

    fn var_file_args(&self) -> [String; 2] {
        [
            format!("-var-file={}", self.var_file().display()),
            format!("-var-file={}", self.secrets_var_file().display()),
        ]
    }

    #[must_use]
    pub fn init(&self, mode: InitMode) -> Invocation {
        let inv = self.terraform().arg("init");
        match mode {
            InitMode::Plain => inv,
            InitMode::Backend {
                reconfigure,
                upgrade,
            } => inv
                .arg(if reconfigure {
                    "-reconfigure"
                } else {
                    "-migrate-state"
                })
                .arg_if(upgrade, "-upgrade"),
        }
    }

    #[must_use]
    pub fn workspace_list(&self) -> Invocation {
        self.terraform().args(["workspace", "list"])
    }

    #[must_use]
    pub fn workspace_select(&self) -> Invocation {
        self.terraform().args(["workspace", "select", self.env.as_str()])
    }

    #[must_use]
    pub fn plan(&self) -> Invocation {
        self.terraform().arg("plan").args(self.var_file_args())
    }

    #[must_use]
    pub fn apply(&self, auto_approve: bool) -> Invocation {
        self.terraform()
            .arg("apply")
            .args(self.var_file_args())
            .arg_if(auto_approve, "-auto-approve")
    }

    #[must_use]
    pub fn destroy(&self, auto_approve: bool) -> Invocation {
        self.terraform()
            .arg("destroy")
            .args(self.var_file_args())
            .arg_if(auto_approve, "-auto-approve")
    }
}
