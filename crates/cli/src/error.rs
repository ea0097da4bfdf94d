use connectors::{error::AdapterError, sql::base::error::ConnectorError};
use model::error::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read a file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load the column catalog: {0}")]
    Catalog(#[from] ModelError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Adapter error: {0}")]
    Adapter(#[from] AdapterError),

    #[error("No connection string given and {0} is not set")]
    MissingConnection(&'static str),
}

impl From<ConnectorError> for CliError {
    fn from(err: ConnectorError) -> Self {
        CliError::Adapter(AdapterError::Connector(err))
    }
}
