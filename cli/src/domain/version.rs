//! Release tags of the form `vX.Y.Z`.
//!
//! Pure functions only. Tags accept leading zeros in any segment; only the
//! shape is checked, never a numeric format.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::{PublishError, VersionError};

/// A semantic triple ordered lexicographically on `(major, minor, patch)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a tag after checking it with [`validate_version`].
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::InvalidFormat`] for any other shape and
    /// [`VersionError::SegmentOverflow`] when a segment does not fit in a `u64`.
    pub fn parse(tag: &str) -> Result<Self, VersionError> {
        let segments = split_tag(tag).ok_or_else(|| VersionError::InvalidFormat(tag.to_string()))?;
        let mut parsed = [0u64; 3];
        for (slot, segment) in parsed.iter_mut().zip(segments) {
            *slot = segment
                .parse()
                .map_err(|_| VersionError::SegmentOverflow {
                    tag: tag.to_string(),
                    segment: segment.to_string(),
                })?;
        }
        let [major, minor, patch] = parsed;
        Ok(Self::new(major, minor, patch))
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Returns `true` iff `tag` is `v` followed by exactly three dot-separated,
/// non-empty runs of ASCII digits.
#[must_use]
pub fn validate_version(tag: &str) -> bool {
    split_tag(tag).is_some()
}

fn split_tag(tag: &str) -> Option<[&str; 3]> {
    let rest = tag.strip_prefix('v')?;
    let mut parts = rest.split('.');
    let segments = [parts.next()?, parts.next()?, parts.next()?];
    if parts.next().is_some() {
        return None;
    }
    segments
        .iter()
        .all(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
        .then_some(segments)
}

/// Highest version among `tags`, ignoring tags that are not `vX.Y.Z`
/// (for example `latest`).
pub fn latest_version<'a>(tags: impl IntoIterator<Item = &'a str>) -> Option<Version> {
    tags.into_iter().filter_map(|t| Version::parse(t).ok()).max()
}

/// A candidate may be published only when strictly greater than the latest
/// published version. With nothing published yet any candidate is accepted.
///
/// # Errors
///
/// Returns [`PublishError::NotNewer`] when `candidate <= latest`.
pub fn ensure_publishable(candidate: Version, latest: Option<Version>) -> Result<(), PublishError> {
    match latest {
        Some(latest) if candidate <= latest => Err(PublishError::NotNewer {
            requested: candidate,
            latest,
        }),
        _ => Ok(()),
    }
}
