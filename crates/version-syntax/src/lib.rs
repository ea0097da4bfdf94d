//! Normalization of driver-reported server version strings for the MySQL
//! family of servers.

use model::core::{vendor::Vendor, version::ServerVersion};

pub mod error;
pub mod mariadb;
pub mod mysql;
pub mod parser;

pub use mariadb::{parse_mariadb_version, try_parse_mariadb_version};
pub use mysql::{parse_oracle_mysql_version, try_parse_oracle_mysql_version};

/// Parses `raw` with the algorithm of the given vendor family.
///
/// Vendors outside the MySQL family have no known version format and always
/// yield `None`.
pub fn parse_server_version(vendor: &Vendor, raw: &str) -> Option<ServerVersion> {
    match vendor {
        Vendor::MariaDb => parse_mariadb_version(raw),
        Vendor::MySql => parse_oracle_mysql_version(raw),
        Vendor::Other(_) => None,
    }
}
