//! Extraction of the raw server version string from a connection.
//!
//! Driver and wrapper layers expose the server version at different depths.
//! A [`ProbeTarget`] declares which of those access paths it offers, and a
//! [`VersionProbe`] walks an ordered list of [`ProbeStrategy`] values until one
//! of them yields a string. A strategy whose access path is not offered is
//! skipped without being invoked.

use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

/// Attributes readable from a low-level driver handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleAttribute {
    ServerVersion,
    ClientVersion,
}

/// Value of a driver handle attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Text(String),
    Integer(i64),
    Null,
}

/// A native low-level driver handle.
pub trait NativeHandle {
    fn attribute(&self, attribute: HandleAttribute) -> Option<AttributeValue>;
}

/// Anything with a public "get server version" operation.
pub trait ServerVersionSource {
    fn server_version(&self) -> Option<String>;
}

/// A connection-like object and the version access paths it offers.
///
/// Every accessor defaults to "not offered", so implementors only declare the
/// paths they actually have.
pub trait ProbeTarget {
    fn native_handle(&self) -> Option<&dyn NativeHandle> {
        None
    }

    fn version_source(&self) -> Option<&dyn ServerVersionSource> {
        None
    }

    fn wrapped_connection(&self) -> Option<&dyn ProbeTarget> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStrategy {
    /// Read the server version attribute of the native driver handle.
    NativeHandleAttribute,
    /// Call the target's own server version operation.
    DirectServerVersion,
    /// Call the server version operation of the connection the target wraps.
    WrappedConnection,
}

/// Strategies in priority order: attribute read, direct call, unwrap.
pub const DEFAULT_STRATEGIES: [ProbeStrategy; 3] = [
    ProbeStrategy::NativeHandleAttribute,
    ProbeStrategy::DirectServerVersion,
    ProbeStrategy::WrappedConnection,
];

impl ProbeStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            ProbeStrategy::NativeHandleAttribute => "native_handle_attribute",
            ProbeStrategy::DirectServerVersion => "direct_server_version",
            ProbeStrategy::WrappedConnection => "wrapped_connection",
        }
    }

    /// Whether `target` offers the access path this strategy needs.
    pub fn applies_to(&self, target: &dyn ProbeTarget) -> bool {
        match self {
            ProbeStrategy::NativeHandleAttribute => target.native_handle().is_some(),
            ProbeStrategy::DirectServerVersion => target.version_source().is_some(),
            ProbeStrategy::WrappedConnection => target
                .wrapped_connection()
                .is_some_and(|inner| inner.version_source().is_some()),
        }
    }

    /// Runs the strategy, `None` when it is not applicable or produced nothing.
    pub fn extract(&self, target: &dyn ProbeTarget) -> Option<String> {
        match self {
            ProbeStrategy::NativeHandleAttribute => {
                let handle = target.native_handle()?;
                match handle.attribute(HandleAttribute::ServerVersion) {
                    Some(AttributeValue::Text(version)) => Some(version),
                    other => {
                        trace!("Native handle server version is not text: {:?}", other);
                        None
                    }
                }
            }
            ProbeStrategy::DirectServerVersion => target.version_source()?.server_version(),
            ProbeStrategy::WrappedConnection => target
                .wrapped_connection()?
                .version_source()?
                .server_version(),
        }
    }
}

impl fmt::Display for ProbeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw version string together with the strategy that found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub strategy: ProbeStrategy,
    pub raw_version: String,
}

/// Ordered chain of version extraction strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionProbe {
    strategies: Vec<ProbeStrategy>,
}

impl Default for VersionProbe {
    fn default() -> Self {
        Self {
            strategies: DEFAULT_STRATEGIES.to_vec(),
        }
    }
}

impl VersionProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategies(strategies: impl IntoIterator<Item = ProbeStrategy>) -> Self {
        Self {
            strategies: strategies.into_iter().collect(),
        }
    }

    pub fn strategies(&self) -> &[ProbeStrategy] {
        &self.strategies
    }

    /// Runs the chain and stops at the first strategy that yields a value.
    pub fn probe(&self, target: &dyn ProbeTarget) -> Option<ProbeOutcome> {
        for strategy in &self.strategies {
            if !strategy.applies_to(target) {
                trace!("Skipping version probe strategy '{}'", strategy);
                continue;
            }

            if let Some(raw_version) = strategy.extract(target) {
                debug!(
                    "Server version '{}' found by strategy '{}'",
                    raw_version, strategy
                );
                return Some(ProbeOutcome {
                    strategy: *strategy,
                    raw_version,
                });
            }

            trace!("Version probe strategy '{}' yielded nothing", strategy);
        }

        debug!("No version probe strategy yielded a server version");
        None
    }

    pub fn server_version(&self, target: &dyn ProbeTarget) -> Option<String> {
        self.probe(target).map(|outcome| outcome.raw_version)
    }
}

/// Raw server version of `target` using the default chain.
pub fn server_version(target: &dyn ProbeTarget) -> Option<String> {
    VersionProbe::default().server_version(target)
}
