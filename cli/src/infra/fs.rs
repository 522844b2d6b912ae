//! Filesystem infrastructure: implements `LinkManager`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::LinkManager;

/// Production `LinkManager` backed by the local filesystem.
pub struct LocalLinks;

impl LinkManager for LocalLinks {
    fn ensure_symlink(&self, target: &Path, link: &Path) -> Result<()> {
        // An unresolvable target leaves the existing entry untouched.
        let resolved = target
            .canonicalize()
            .with_context(|| format!("cannot resolve {}", target.display()))?;
        // symlink_metadata so dangling links are detected too
        if std::fs::symlink_metadata(link).is_ok() {
            std::fs::remove_file(link)
                .with_context(|| format!("removing existing {}", link.display()))?;
        }
        tracing::debug!(link = %link.display(), target = %resolved.display(), "linking");
        symlink(&resolved, link)
            .with_context(|| format!("linking {} -> {}", link.display(), resolved.display()))
    }
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}
