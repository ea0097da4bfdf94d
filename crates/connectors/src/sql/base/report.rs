use crate::sql::base::{
    capabilities::PlatformCapabilities,
    hints::{IndexHint, index_hints, json_column_type},
    probe::{ProbeStrategy, ProbeTarget},
};
use model::{
    core::{data_type::DataType, vendor::Vendor, version::ServerVersion},
    schema::catalog::ColumnCatalog,
};
use serde::Serialize;

/// Everything known about one server's capabilities, ready for DDL generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityReport {
    pub vendor: Vendor,
    pub raw_version: Option<String>,
    pub probe_strategy: Option<ProbeStrategy>,
    pub version: Option<ServerVersion>,
    pub json_supported: bool,
    pub json_column_type: DataType,
    pub index_hints: Vec<IndexHint>,
}

impl CapabilityReport {
    pub fn platform(&self) -> PlatformCapabilities {
        PlatformCapabilities::new(self.vendor.clone(), self.version)
    }

    pub fn limited_columns(&self) -> impl Iterator<Item = &str> {
        self.index_hints
            .iter()
            .filter(|hint| hint.prefix_length.is_some())
            .map(|hint| hint.column.as_str())
    }
}

pub trait CapabilityProbe {
    /// Probes `target` for its version and resolves every capability.
    fn detect(&self, target: &dyn ProbeTarget, vendor: &Vendor) -> CapabilityReport;

    /// Resolves capabilities from an already known raw version string.
    fn resolve(&self, vendor: &Vendor, raw_version: Option<&str>) -> CapabilityReport;
}

pub(crate) fn build_report<S: AsRef<str>>(
    vendor: &Vendor,
    raw_version: Option<String>,
    probe_strategy: Option<ProbeStrategy>,
    indexed_columns: &[S],
    catalog: &dyn ColumnCatalog,
) -> CapabilityReport {
    let version = raw_version
        .as_deref()
        .and_then(|raw| version_syntax::parse_server_version(vendor, raw));
    let platform = PlatformCapabilities::new(vendor.clone(), version);

    CapabilityReport {
        vendor: vendor.clone(),
        raw_version,
        probe_strategy,
        version,
        json_supported: platform.is_json_supported(),
        json_column_type: json_column_type(vendor, version),
        index_hints: index_hints(indexed_columns, vendor, version, catalog),
    }
}
