use crate::sql::base::{
    probe::{ProbeTarget, VersionProbe},
    report::{CapabilityProbe, CapabilityReport, build_report},
};
use model::{
    core::vendor::Vendor,
    schema::catalog::{AUDIT_TABLE_INDEXED_COLUMNS, TableCatalog},
};
use tracing::{info, warn};

/// Capability detection for one table of a MySQL-family server.
pub struct MySqlCapabilityProbe {
    catalog: TableCatalog,
    indexed_columns: Vec<String>,
    version_probe: VersionProbe,
}

impl MySqlCapabilityProbe {
    pub fn new(catalog: TableCatalog, indexed_columns: Vec<String>) -> Self {
        Self {
            catalog,
            indexed_columns,
            version_probe: VersionProbe::default(),
        }
    }

    /// Probe for the audit log table and its indexes.
    pub fn audit_table() -> Self {
        Self::new(
            TableCatalog::audit_table(),
            AUDIT_TABLE_INDEXED_COLUMNS
                .iter()
                .map(|c| c.to_string())
                .collect(),
        )
    }

    pub fn with_version_probe(mut self, version_probe: VersionProbe) -> Self {
        self.version_probe = version_probe;
        self
    }

    pub fn catalog(&self) -> &TableCatalog {
        &self.catalog
    }

    fn log_report(report: &CapabilityReport) {
        if report.version.is_none() {
            warn!(
                "Server version of {} is indeterminate (reported: {:?}), assuming current capabilities",
                report.vendor, report.raw_version
            );
        }

        info!(
            "{} {}: json_supported={}, limited_indexes={:?}",
            report.vendor,
            report
                .version
                .map(|v| v.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            report.json_supported,
            report.limited_columns().collect::<Vec<_>>()
        );
    }
}

impl CapabilityProbe for MySqlCapabilityProbe {
    fn detect(&self, target: &dyn ProbeTarget, vendor: &Vendor) -> CapabilityReport {
        let outcome = self.version_probe.probe(target);
        let (raw_version, strategy) = match outcome {
            Some(outcome) => (Some(outcome.raw_version), Some(outcome.strategy)),
            None => (None, None),
        };

        let report = build_report(
            vendor,
            raw_version,
            strategy,
            self.indexed_columns.as_slice(),
            &self.catalog,
        );
        Self::log_report(&report);
        report
    }

    fn resolve(&self, vendor: &Vendor, raw_version: Option<&str>) -> CapabilityReport {
        let report = build_report(
            vendor,
            raw_version.map(str::to_string),
            None,
            self.indexed_columns.as_slice(),
            &self.catalog,
        );
        Self::log_report(&report);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::base::probe::{ProbeStrategy, ServerVersionSource};
    use model::core::{data_type::DataType, version::ServerVersion};
    use tracing_test::traced_test;

    struct Wrapper(Inner);
    struct Inner(&'static str);

    impl ServerVersionSource for Inner {
        fn server_version(&self) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    impl ProbeTarget for Inner {
        fn version_source(&self) -> Option<&dyn ServerVersionSource> {
            Some(self)
        }
    }

    impl ProbeTarget for Wrapper {
        fn wrapped_connection(&self) -> Option<&dyn ProbeTarget> {
            Some(&self.0)
        }
    }

    struct Opaque;

    impl ProbeTarget for Opaque {}

    #[test]
    fn test_detect_old_mariadb_through_wrapper() {
        let target = Wrapper(Inner("5.5.5-10.1.48-MariaDB-0ubuntu0.18.04.1"));
        let report = MySqlCapabilityProbe::audit_table().detect(&target, &Vendor::MariaDb);

        assert_eq!(report.probe_strategy, Some(ProbeStrategy::WrappedConnection));
        assert_eq!(report.version, Some(ServerVersion::new(10, 1, 48)));
        assert!(!report.json_supported);
        assert_eq!(report.json_column_type, DataType::Text);
        assert_eq!(
            report.limited_columns().collect::<Vec<_>>(),
            vec!["object_id", "discriminator", "blame_id"]
        );
    }

    #[test]
    fn test_detect_current_mysql() {
        let report = MySqlCapabilityProbe::audit_table().detect(&Inner("8.0.36"), &Vendor::MySql);

        assert_eq!(report.probe_strategy, Some(ProbeStrategy::DirectServerVersion));
        assert!(report.json_supported);
        assert_eq!(report.json_column_type, DataType::Json);
        assert_eq!(report.limited_columns().count(), 0);
    }

    #[traced_test]
    #[test]
    fn test_indeterminate_target_uses_optimistic_defaults() {
        let report = MySqlCapabilityProbe::audit_table().detect(&Opaque, &Vendor::MariaDb);

        assert_eq!(report.raw_version, None);
        assert_eq!(report.version, None);
        assert!(report.json_supported);
        assert_eq!(report.limited_columns().count(), 0);
        assert!(logs_contain("is indeterminate"));
    }

    #[test]
    fn test_resolve_from_raw_version() {
        let report =
            MySqlCapabilityProbe::audit_table().resolve(&Vendor::MySql, Some("5.6.51-log"));

        assert_eq!(report.probe_strategy, None);
        assert_eq!(report.version, Some(ServerVersion::new(5, 6, 51)));
        assert_eq!(report.limited_columns().count(), 3);
    }

    #[test]
    fn test_report_serializes() {
        let report = MySqlCapabilityProbe::audit_table().resolve(&Vendor::MariaDb, Some("10.2.6-MariaDB"));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["vendor"], "mariadb");
        assert_eq!(json["json_column_type"], "text");
        assert_eq!(json["version"]["patch"], 6);
        assert_eq!(json["index_hints"][1]["column"], "object_id");
        assert_eq!(json["index_hints"][1]["prefix_length"], serde_json::Value::Null);
    }
}
