//! Container image build, publish and run invocations.

use std::path::Path;

use cominty_common::CONTAINER_PORT;

use crate::domain::config::ProjectConfig;
use crate::domain::invocation::Invocation;
use crate::domain::version::Version;

/// Platform of the deployment target (ECS Fargate).
pub const REMOTE_PLATFORM: &str = "linux/amd64";

/// Whether the project image already exists locally.
///
/// Produced by the pre-step of `server` and `chat` and handed to them as a
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePresence {
    Present,
    Missing,
}

impl ImagePresence {
    /// Interpret the stdout of `docker images -q <image>`: any image id means present.
    #[must_use]
    pub fn from_image_ids(stdout: &str) -> Self {
        if stdout.trim().is_empty() {
            Self::Missing
        } else {
            Self::Present
        }
    }

    /// A build is needed when the image is missing or a rebuild is forced.
    #[must_use]
    pub fn needs_build(self, force_build: bool) -> bool {
        force_build || self == Self::Missing
    }
}

/// Options for `docker build`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Target the deployment platform instead of the host's.
    pub remote: bool,
    pub no_cache: bool,
    /// Plain progress output with full build logs.
    pub debug: bool,
}

#[must_use]
pub fn image_ids(image: &str) -> Invocation {
    Invocation::new("docker").args(["images", "-q", image])
}

#[must_use]
pub fn build(project: &ProjectConfig, opts: BuildOptions) -> Invocation {
    Invocation::new("docker")
        .arg("build")
        .args(if opts.remote {
            vec!["--platform", REMOTE_PLATFORM]
        } else {
            Vec::new()
        })
        .arg_if(opts.debug, "--progress=plain")
        .arg_if(opts.no_cache, "--no-cache")
        .args(["-t".to_string(), project.local_image(), ".".to_string()])
        .current_dir(&project.project_root)
}

#[must_use]
pub fn registry_password(project: &ProjectConfig) -> Invocation {
    Invocation::new("aws").args([
        "ecr",
        "get-login-password",
        "--region",
        project.aws_region.as_str(),
    ])
}

/// `docker login` reading the password from stdin.
#[must_use]
pub fn registry_login(project: &ProjectConfig) -> Invocation {
    Invocation::new("docker").args([
        "login",
        "--username",
        "AWS",
        "--password-stdin",
        project.ecr_base_url.as_str(),
    ])
}

#[must_use]
pub fn tag(project: &ProjectConfig, version: Version) -> Invocation {
    Invocation::new("docker").args([
        "tag".to_string(),
        project.local_image(),
        project.remote_image(&version.to_string()),
    ])
}

#[must_use]
pub fn push(project: &ProjectConfig, version: Version) -> Invocation {
    Invocation::new("docker").args(["push".to_string(), project.remote_image(&version.to_string())])
}

fn port_mapping() -> String {
    format!("{CONTAINER_PORT}:{CONTAINER_PORT}")
}

/// Bind mounts for the project sources and the host AWS credentials.
fn dev_volumes(project_root: &Path, home: &Path) -> Vec<String> {
    vec![
        "-v".to_string(),
        format!("{}:/app", project_root.display()),
        "-v".to_string(),
        format!("{}:/root/.aws", home.join(".aws").display()),
    ]
}

/// Run the service image. `local` mounts sources and credentials and turns
/// on debug logging inside the container.
#[must_use]
pub fn run_server(project: &ProjectConfig, local: bool, home: &Path) -> Invocation {
    let mut inv = Invocation::new("docker")
        .args(["run".to_string(), "-p".to_string(), port_mapping()])
        .args(["--env-file", ".env"]);
    if local {
        inv = inv
            .args(dev_volumes(&project.project_root, home))
            .args(["-e", "RUST_LOG=debug"]);
    }
    inv.arg(project.local_image()).current_dir(&project.project_root)
}

/// Run the image with the chat frontend and password auth enabled.
#[must_use]
pub fn run_chat(project: &ProjectConfig, home: &Path) -> Invocation {
    let inv = Invocation::new("docker")
        .args(["run".to_string(), "-p".to_string(), port_mapping()])
        .args(["-e", "USE_PASSWORD_AUTH=true", "--env-file", ".env"])
        .args(dev_volumes(&project.project_root, home))
        .arg(project.local_image());
    let command = project
        .chat_command
        .as_deref()
        .map(|c| c.split_whitespace().collect::<Vec<_>>())
        .unwrap_or_default();
    inv.args(command).current_dir(&project.project_root)
}
