//! MariaDB server version strings.
//!
//! MariaDB reports its version in several historical shapes:
//!
//! - `10.2.6-MariaDB`
//! - `5.5.5-10.3.7-MariaDB-1:10.3.7+maria~bionic`, where `5.5.5-` is a
//!   compatibility prefix added by some distributions
//! - `5.5.5-MariaDB-10.0.8-xenial`, with a `mariadb-` token ahead of the version
//!
//! Unlike MySQL, all three components are required.

use crate::{
    error::VersionSyntaxError,
    parser::{Rule, match_components},
};
use model::core::version::ServerVersion;
use tracing::debug;

pub fn try_parse_mariadb_version(raw: &str) -> Result<ServerVersion, VersionSyntaxError> {
    let components = match_components(Rule::mariadb_version, raw)?;

    match (components.major, components.minor, components.patch) {
        (Some(major), Some(minor), Some(patch)) => Ok(ServerVersion::new(major, minor, patch)),
        (None, _, _) => Err(VersionSyntaxError::MissingComponent("major")),
        (_, None, _) => Err(VersionSyntaxError::MissingComponent("minor")),
        (_, _, None) => Err(VersionSyntaxError::MissingComponent("patch")),
    }
}

/// Normalizes a MariaDB version string, `None` when it is indeterminate.
pub fn parse_mariadb_version(raw: &str) -> Option<ServerVersion> {
    match try_parse_mariadb_version(raw) {
        Ok(version) => Some(version),
        Err(err) => {
            debug!("Indeterminate MariaDB server version '{}': {}", raw, err);
            None
        }
    }
}
