use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// Server vendor as decided by whoever already knows the connection dialect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Vendor {
    MySql,
    MariaDb,
    Other(String),
}

impl Vendor {
    pub fn name(&self) -> &str {
        match self {
            Vendor::MySql => "mysql",
            Vendor::MariaDb => "mariadb",
            Vendor::Other(name) => name,
        }
    }

    /// True for both members of the MySQL family.
    pub fn is_mysql_family(&self) -> bool {
        matches!(self, Vendor::MySql | Vendor::MariaDb)
    }
}

impl FromStr for Vendor {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mysql" | "oracle-mysql" => Ok(Vendor::MySql),
            "mariadb" | "maria" => Ok(Vendor::MariaDb),
            other => Ok(Vendor::Other(other.to_string())),
        }
    }
}

impl From<String> for Vendor {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(vendor) => vendor,
            Err(never) => match never {},
        }
    }
}

impl From<Vendor> for String {
    fn from(vendor: Vendor) -> Self {
        vendor.name().to_string()
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
