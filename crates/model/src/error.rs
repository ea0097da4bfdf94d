use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// A column type tag that does not map to any known data type.
    #[error("Unknown column type: {0}")]
    UnknownType(String),

    /// The column catalog document could not be read.
    #[error("Invalid column catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
