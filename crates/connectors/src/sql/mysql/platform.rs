use model::core::vendor::Vendor;

/// Tells MariaDB from Oracle MySQL by the version string the server reports.
///
/// Both speak the same protocol, so the version string is the only reliable
/// marker available before any query runs.
pub fn detect_vendor(raw_version: &str) -> Vendor {
    if raw_version.to_lowercase().contains("mariadb") {
        Vendor::MariaDb
    } else {
        Vendor::MySql
    }
}
