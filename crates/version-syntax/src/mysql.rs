//! Oracle MySQL server version strings.
//!
//! The driver reports strings such as `8.0.36`, `5.7.44-log` or, for some
//! managed deployments, just `5.7`. Only the leading `major(.minor(.patch))`
//! is significant.

use crate::{
    error::VersionSyntaxError,
    parser::{Rule, match_components},
};
use model::core::version::ServerVersion;
use tracing::debug;

/// Patch assumed for a bare `5.7`, which is deployed as at least 5.7.9.
const MYSQL_57_DEFAULT_PATCH: u32 = 9;

pub fn try_parse_oracle_mysql_version(raw: &str) -> Result<ServerVersion, VersionSyntaxError> {
    let components = match_components(Rule::mysql_version, raw)?;

    let major = components
        .major
        .ok_or(VersionSyntaxError::MissingComponent("major"))?;
    let minor = components.minor.unwrap_or(0);
    let patch = match components.patch {
        None if major == 5 && minor == 7 => Some(MYSQL_57_DEFAULT_PATCH),
        patch => patch,
    };

    Ok(ServerVersion {
        major,
        minor,
        patch,
    })
}

/// Normalizes an Oracle MySQL version string, `None` when it is indeterminate.
pub fn parse_oracle_mysql_version(raw: &str) -> Option<ServerVersion> {
    match try_parse_oracle_mysql_version(raw) {
        Ok(version) => Some(version),
        Err(err) => {
            debug!("Indeterminate MySQL server version '{}': {}", raw, err);
            None
        }
    }
}
