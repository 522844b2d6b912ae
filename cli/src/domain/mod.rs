//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod container;
pub mod environment;
pub mod error;
pub mod invocation;
pub mod stack;
pub mod terraform;
pub mod toolchain;
pub mod version;

pub use config::{ConfigLayer, ProjectConfig};
pub use container::{BuildOptions, ImagePresence};
pub use environment::{Environment, is_valid_environment, parse_workspace_list};
pub use error::{CommandError, ConfigError, EnvironmentError, PublishError, VersionError};
pub use invocation::Invocation;
pub use version::{Version, ensure_publishable, validate_version};
