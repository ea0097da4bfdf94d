use thiserror::Error;

/// All errors coming from the database layer.
#[derive(Debug, Error)]
pub enum DbError {
    /// Any MySQL driver error.
    #[error("SQL error: {0}")]
    Sql(#[from] mysql_async::Error),

    /// A query that must return a row returned none.
    #[error("Query returned no rows: {0}")]
    NoRows(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Errors happening during adapter or connection setup.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// The connection string could not be parsed.
    #[error("Invalid connection string: {0}")]
    Url(#[from] mysql_async::UrlError),

    /// The driver failed to open a connection.
    #[error("MySQL connector creation failed: {0}")]
    MySql(#[from] mysql_async::Error),

    /// The connection was opened but the initial version query failed.
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}
