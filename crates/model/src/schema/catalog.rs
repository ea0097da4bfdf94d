use crate::{
    core::data_type::DataType,
    error::ModelError,
    schema::column::ColumnSpec,
};
use std::{collections::HashMap, path::Path};

/// Read-only lookup of column metadata by column name.
pub trait ColumnCatalog {
    fn column(&self, name: &str) -> Option<&ColumnSpec>;
}

/// Columns of the audit log table, in declaration order.
pub const AUDIT_TABLE_COLUMNS: [&str; 12] = [
    "id",
    "type",
    "object_id",
    "discriminator",
    "transaction_hash",
    "diffs",
    "blame_id",
    "blame_user",
    "blame_user_fqdn",
    "blame_user_firewall",
    "ip",
    "created_at",
];

/// Columns of the audit log table that carry an index.
pub const AUDIT_TABLE_INDEXED_COLUMNS: [&str; 6] = [
    "type",
    "object_id",
    "discriminator",
    "transaction_hash",
    "blame_id",
    "created_at",
];

/// In-memory column catalog for a single table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableCatalog {
    columns: HashMap<String, ColumnSpec>,
}

impl TableCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of the audit log table the capability checks were built for.
    pub fn audit_table() -> Self {
        let entries = [
            ("id", ColumnSpec::new(DataType::Integer)),
            ("type", ColumnSpec::string(10)),
            ("object_id", ColumnSpec::string(255)),
            ("discriminator", ColumnSpec::string(255)),
            ("transaction_hash", ColumnSpec::string(40)),
            ("diffs", ColumnSpec::new(DataType::Json)),
            ("blame_id", ColumnSpec::string(255)),
            ("blame_user", ColumnSpec::string(255)),
            ("blame_user_fqdn", ColumnSpec::string(255)),
            ("blame_user_firewall", ColumnSpec::string(100)),
            ("ip", ColumnSpec::string(45)),
            ("created_at", ColumnSpec::new(DataType::DateTimeImmutable)),
        ];

        entries.into_iter().collect()
    }

    /// Parses a JSON object of `column name -> {"type": .., "length": ..}`.
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let columns: HashMap<String, ColumnSpec> = serde_json::from_str(json)?;
        Ok(Self { columns })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn insert(&mut self, name: impl Into<String>, spec: ColumnSpec) -> Option<ColumnSpec> {
        self.columns.insert(name.into(), spec)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in a stable (sorted) order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.columns.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl ColumnCatalog for TableCatalog {
    fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.get(name)
    }
}

impl ColumnCatalog for HashMap<String, ColumnSpec> {
    fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.get(name)
    }
}

impl<N: Into<String>> FromIterator<(N, ColumnSpec)> for TableCatalog {
    fn from_iter<I: IntoIterator<Item = (N, ColumnSpec)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(name, spec)| (name.into(), spec))
                .collect(),
        }
    }
}
