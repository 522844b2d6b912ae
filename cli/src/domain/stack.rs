//! CloudFormation stack for the chat threads table.

use std::path::{Path, PathBuf};

use crate::domain::environment::Environment;
use crate::domain::invocation::Invocation;

const STACK_BASE_NAME: &str = "chat-backend-threads-table";
const TEMPLATE_FILE: &str = "cominty_chat_dynamodb_storage.json";

/// The chat threads table stack of one environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTableStack {
    env: Environment,
    template: PathBuf,
}

impl ChatTableStack {
    #[must_use]
    pub fn new(project_root: &Path, env: Environment) -> Self {
        let template = project_root
            .join("infra")
            .join("cloudformation")
            .join("data_layer")
            .join(env.as_str())
            .join(TEMPLATE_FILE);
        Self { env, template }
    }

    #[must_use]
    pub fn name(&self) -> String {
        format!("{STACK_BASE_NAME}-{}", self.env)
    }

    #[must_use]
    pub fn template(&self) -> &Path {
        &self.template
    }

    fn change(&self, action: &str) -> Invocation {
        Invocation::new("aws").args([
            "cloudformation".to_string(),
            action.to_string(),
            "--stack-name".to_string(),
            self.name(),
            "--template-body".to_string(),
            format!("file://{}", self.template.display()),
            "--capabilities".to_string(),
            "CAPABILITY_IAM".to_string(),
        ])
    }

    #[must_use]
    pub fn create(&self) -> Invocation {
        self.change("create-stack")
    }

    #[must_use]
    pub fn update(&self) -> Invocation {
        self.change("update-stack")
    }

    #[must_use]
    pub fn enable_termination_protection(&self) -> Invocation {
        Invocation::new("aws").args([
            "cloudformation".to_string(),
            "update-termination-protection".to_string(),
            "--enable-termination-protection".to_string(),
            "--stack-name".to_string(),
            self.name(),
        ])
    }
}
