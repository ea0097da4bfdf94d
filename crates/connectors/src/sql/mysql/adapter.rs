use crate::sql::{
    base::{
        error::{ConnectorError, DbError},
        probe::{AttributeValue, HandleAttribute, NativeHandle, ProbeTarget, ServerVersionSource},
    },
    mysql::platform::detect_vendor,
};
use model::core::vendor::Vendor;
use mysql_async::{Opts, Pool, prelude::*};
use tracing::{error, info};

const QUERY_SERVER_VERSION_SQL: &str = "SELECT VERSION()";

/// Handshake version MariaDB 10+ announces for replication compatibility.
const MARIADB_COMPAT_HANDSHAKE: (u16, u16, u16) = (5, 5, 5);

/// Driver-level facts captured once when the connection is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MySqlNativeHandle {
    server_version: Option<String>,
    handshake_version: (u16, u16, u16),
}

impl MySqlNativeHandle {
    pub fn new(server_version: Option<String>, handshake_version: (u16, u16, u16)) -> Self {
        Self {
            server_version,
            handshake_version,
        }
    }
}

impl NativeHandle for MySqlNativeHandle {
    fn attribute(&self, attribute: HandleAttribute) -> Option<AttributeValue> {
        match attribute {
            HandleAttribute::ServerVersion => Some(match &self.server_version {
                Some(version) => AttributeValue::Text(version.clone()),
                None => AttributeValue::Null,
            }),
            HandleAttribute::ClientVersion => None,
        }
    }
}

/// Version triple from the connection handshake, as `major.minor.patch`.
///
/// The MariaDB compatibility triple says nothing about the real release, so
/// it yields no version.
impl ServerVersionSource for MySqlNativeHandle {
    fn server_version(&self) -> Option<String> {
        if self.handshake_version == MARIADB_COMPAT_HANDSHAKE {
            return None;
        }
        let (major, minor, patch) = self.handshake_version;
        Some(format!("{major}.{minor}.{patch}"))
    }
}

#[derive(Clone)]
pub struct MySqlAdapter {
    pool: Pool,
    handle: MySqlNativeHandle,
}

impl MySqlAdapter {
    /// Opens a pool and reads the server version once.
    pub async fn connect(url: &str) -> Result<Self, ConnectorError> {
        let opts = Opts::from_url(url).map_err(|e| {
            error!("MySQL connection string parse failed: {}", e);
            ConnectorError::Url(e)
        })?;
        let pool = Pool::new(opts);

        let mut conn = pool.get_conn().await.map_err(|e| {
            error!("MySQL connection failed: {}", e);
            ConnectorError::MySql(e)
        })?;

        let handshake_version = conn.server_version();
        let server_version: Option<String> = conn
            .query_first(QUERY_SERVER_VERSION_SQL)
            .await
            .map_err(DbError::from)?;

        info!(
            "Connected to MySQL-family server, reported version: {:?}",
            server_version
        );
        drop(conn);

        Ok(MySqlAdapter {
            pool,
            handle: MySqlNativeHandle::new(server_version, handshake_version),
        })
    }

    pub fn raw_server_version(&self) -> Option<&str> {
        self.handle.server_version.as_deref()
    }

    /// Vendor decided from the reported version string, MySQL when unknown.
    pub fn vendor(&self) -> Vendor {
        self.raw_server_version()
            .map(detect_vendor)
            .unwrap_or(Vendor::MySql)
    }

    pub async fn disconnect(self) -> Result<(), DbError> {
        self.pool.disconnect().await?;
        Ok(())
    }
}

impl ProbeTarget for MySqlAdapter {
    fn native_handle(&self) -> Option<&dyn NativeHandle> {
        Some(&self.handle)
    }

    fn version_source(&self) -> Option<&dyn ServerVersionSource> {
        Some(&self.handle)
    }
}
