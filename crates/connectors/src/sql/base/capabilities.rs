//! Feature gates for MySQL-family servers.
//!
//! Every predicate answers with a plain `bool`. An unknown or indeterminate
//! server version never fails the caller; it resolves to the optimistic
//! answer instead (index length not limited, JSON supported).

use model::{
    core::{
        vendor::Vendor,
        version::{ServerVersion, VersionThreshold},
    },
    schema::catalog::ColumnCatalog,
};

/// Shortest declared string length that can overflow the index key limit
/// with a four-byte charset.
pub const MIN_LIMITED_STRING_LENGTH: u32 = 191;

/// First MariaDB release with large index key prefixes by default.
pub const MARIADB_LARGE_INDEX_PREFIX: VersionThreshold = VersionThreshold::new(10, 2, 2);

/// First MariaDB release with the `JSON` column type alias.
pub const MARIADB_NATIVE_JSON: VersionThreshold = VersionThreshold::new(10, 2, 7);

/// First Oracle MySQL release with large index key prefixes by default.
pub const MYSQL_LARGE_INDEX_PREFIX: VersionThreshold = VersionThreshold::new(5, 7, 7);

/// Whether an index on `column_name` must be restricted to a key prefix.
///
/// Only string columns declared at least [`MIN_LIMITED_STRING_LENGTH`] long
/// (or without a declared length) are affected, and only on MariaDB before
/// 10.2.2 or MySQL before 5.7.7.
pub fn is_index_length_limited(
    column_name: &str,
    vendor: &Vendor,
    version: Option<ServerVersion>,
    catalog: &dyn ColumnCatalog,
) -> bool {
    let Some(column) = catalog.column(column_name) else {
        return false;
    };

    if !column.data_type.is_string()
        || column
            .length
            .is_some_and(|length| length < MIN_LIMITED_STRING_LENGTH)
    {
        return false;
    }

    let threshold = match vendor {
        Vendor::MariaDb => MARIADB_LARGE_INDEX_PREFIX,
        Vendor::MySql => MYSQL_LARGE_INDEX_PREFIX,
        Vendor::Other(_) => return false,
    };

    version
        .and_then(|version| version.is_below(&threshold))
        .unwrap_or(false)
}

/// Whether the server has a native `JSON` column type.
pub fn is_json_supported(vendor: &Vendor, version: Option<ServerVersion>) -> bool {
    match vendor {
        Vendor::MariaDb => version
            .and_then(|version| version.is_at_least(&MARIADB_NATIVE_JSON))
            .unwrap_or(true),
        _ => true,
    }
}

/// Vendor and normalized version of one server, bundled for repeated queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformCapabilities {
    vendor: Vendor,
    version: Option<ServerVersion>,
}

impl PlatformCapabilities {
    pub fn new(vendor: Vendor, version: Option<ServerVersion>) -> Self {
        Self { vendor, version }
    }

    /// Normalizes `raw_version` with the vendor's parser first.
    pub fn from_raw(vendor: Vendor, raw_version: Option<&str>) -> Self {
        let version =
            raw_version.and_then(|raw| version_syntax::parse_server_version(&vendor, raw));
        Self { vendor, version }
    }

    pub fn vendor(&self) -> &Vendor {
        &self.vendor
    }

    pub fn version(&self) -> Option<ServerVersion> {
        self.version
    }

    pub fn is_index_length_limited(&self, column_name: &str, catalog: &dyn ColumnCatalog) -> bool {
        is_index_length_limited(column_name, &self.vendor, self.version, catalog)
    }

    pub fn is_json_supported(&self) -> bool {
        is_json_supported(&self.vendor, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{
        core::data_type::DataType,
        schema::{catalog::TableCatalog, column::ColumnSpec},
    };

    fn catalog() -> TableCatalog {
        [
            ("wide", ColumnSpec::string(255)),
            ("boundary", ColumnSpec::string(191)),
            ("narrow", ColumnSpec::string(100)),
            ("just_below", ColumnSpec::string(190)),
            ("unsized", ColumnSpec::new(DataType::String)),
            ("body", ColumnSpec::new(DataType::Text)),
            ("count", ColumnSpec::new(DataType::Integer)),
        ]
        .into_iter()
        .collect()
    }

    fn other() -> Vendor {
        Vendor::Other("postgres".to_string())
    }

    #[test]
    fn test_mariadb_index_threshold() {
        let catalog = catalog();
        let limited = |v| is_index_length_limited("wide", &Vendor::MariaDb, Some(v), &catalog);

        assert!(limited(ServerVersion::new(10, 1, 0)));
        assert!(limited(ServerVersion::new(10, 2, 1)));
        assert!(!limited(ServerVersion::new(10, 2, 2)));
        assert!(!limited(ServerVersion::new(11, 4, 2)));
    }

    #[test]
    fn test_mysql_index_threshold() {
        let catalog = catalog();
        let limited = |v| is_index_length_limited("wide", &Vendor::MySql, Some(v), &catalog);

        assert!(limited(ServerVersion::new(5, 6, 51)));
        assert!(limited(ServerVersion::new(5, 7, 6)));
        assert!(!limited(ServerVersion::new(5, 7, 7)));
        assert!(!limited(ServerVersion::new(5, 7, 9)));
        assert!(!limited(ServerVersion::new(8, 0, 36)));
    }

    #[test]
    fn test_mysql_without_patch() {
        let catalog = catalog();
        let limited = |v| is_index_length_limited("wide", &Vendor::MySql, Some(v), &catalog);

        assert!(limited(ServerVersion::without_patch(5, 6)));
        assert!(!limited(ServerVersion::without_patch(8, 0)));
        // cannot decide between 5.7.0 and 5.7.99, so assume not limited
        assert!(!limited(ServerVersion::without_patch(5, 7)));
    }

    #[test]
    fn test_only_wide_string_columns_are_limited() {
        let catalog = catalog();
        let old = Some(ServerVersion::new(5, 6, 0));

        for column in ["narrow", "just_below", "body", "count", "missing"] {
            assert!(
                !is_index_length_limited(column, &Vendor::MySql, old, &catalog),
                "{column}"
            );
        }
        for column in ["wide", "boundary", "unsized"] {
            assert!(
                is_index_length_limited(column, &Vendor::MySql, old, &catalog),
                "{column}"
            );
        }
    }

    #[test]
    fn test_other_string_like_types_are_not_limited() {
        let catalog = TableCatalog::from_json_str(
            r#"{"code":{"type":"ascii_string","length":255},"name":{"type":"varchar","length":255}}"#,
        )
        .unwrap();
        let old = Some(ServerVersion::new(5, 6, 0));

        assert!(!is_index_length_limited("code", &Vendor::MySql, old, &catalog));
        assert!(!is_index_length_limited("name", &Vendor::MySql, old, &catalog));
        assert_eq!(
            catalog.column("code").map(|c| c.data_type.type_tag().into_owned()),
            Some("ascii_string".to_string())
        );
    }

    #[test]
    fn test_unknown_version_or_vendor_is_not_limited() {
        let catalog = catalog();
        assert!(!is_index_length_limited("wide", &Vendor::MariaDb, None, &catalog));
        assert!(!is_index_length_limited("wide", &Vendor::MySql, None, &catalog));
        assert!(!is_index_length_limited(
            "wide",
            &other(),
            Some(ServerVersion::new(1, 0, 0)),
            &catalog
        ));
    }

    #[test]
    fn test_json_support() {
        assert!(is_json_supported(&Vendor::MariaDb, None));
        assert!(!is_json_supported(&Vendor::MariaDb, Some(ServerVersion::new(10, 2, 6))));
        assert!(is_json_supported(&Vendor::MariaDb, Some(ServerVersion::new(10, 2, 7))));
        assert!(is_json_supported(&Vendor::MariaDb, Some(ServerVersion::new(10, 11, 0))));
        assert!(!is_json_supported(&Vendor::MariaDb, Some(ServerVersion::new(5, 5, 5))));

        for version in [None, Some(ServerVersion::new(5, 0, 0)), Some(ServerVersion::new(8, 0, 36))] {
            assert!(is_json_supported(&Vendor::MySql, version));
            assert!(is_json_supported(&other(), version));
        }
    }

    #[test]
    fn test_from_raw() {
        let catalog = catalog();
        let platform = PlatformCapabilities::from_raw(
            Vendor::MariaDb,
            Some("5.5.5-10.1.48-MariaDB-0ubuntu0.18.04.1"),
        );
        assert_eq!(platform.version(), Some(ServerVersion::new(10, 1, 48)));
        assert!(platform.is_index_length_limited("wide", &catalog));
        assert!(!platform.is_json_supported());

        let unknown = PlatformCapabilities::from_raw(Vendor::MariaDb, Some("garbage"));
        assert_eq!(unknown.version(), None);
        assert!(!unknown.is_index_length_limited("wide", &catalog));
        assert!(unknown.is_json_supported());
    }
}
