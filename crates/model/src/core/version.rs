use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// Normalized server version.
///
/// `major` and `minor` are always known once a version string has been parsed.
/// `patch` is `None` when the server reported only `major.minor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServerVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

/// A fully specified version used as a feature gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionThreshold {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl VersionThreshold {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for VersionThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl ServerVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch: Some(patch),
        }
    }

    pub const fn without_patch(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            patch: None,
        }
    }

    /// Numeric comparison against a threshold.
    ///
    /// Returns `None` when the patch is unknown and `major.minor` equals the
    /// threshold's, since the answer then hinges on the missing component.
    pub fn compare_to(&self, threshold: &VersionThreshold) -> Option<Ordering> {
        match (self.major, self.minor).cmp(&(threshold.major, threshold.minor)) {
            Ordering::Equal => self.patch.map(|patch| patch.cmp(&threshold.patch)),
            ordering => Some(ordering),
        }
    }

    pub fn is_below(&self, threshold: &VersionThreshold) -> Option<bool> {
        self.compare_to(threshold).map(Ordering::is_lt)
    }

    pub fn is_at_least(&self, threshold: &VersionThreshold) -> Option<bool> {
        self.compare_to(threshold).map(Ordering::is_ge)
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}
