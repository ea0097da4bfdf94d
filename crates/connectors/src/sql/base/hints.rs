//! DDL hints derived from the capability predicates.

use crate::sql::base::capabilities::{is_index_length_limited, is_json_supported};
use model::{
    core::{data_type::DataType, vendor::Vendor, version::ServerVersion},
    schema::catalog::ColumnCatalog,
};
use serde::Serialize;

/// Key prefix length used for limited indexes, in characters.
pub const INDEX_PREFIX_LENGTH: u32 = 191;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexHint {
    pub column: String,
    /// `Some` when only a prefix of the column may be indexed.
    pub prefix_length: Option<u32>,
}

impl IndexHint {
    /// Index column expression for MySQL DDL, e.g. `object_id(191)`.
    pub fn to_sql(&self) -> String {
        match self.prefix_length {
            Some(length) => format!("{}({})", self.column, length),
            None => self.column.clone(),
        }
    }
}

pub fn index_hints<S: AsRef<str>>(
    indexed_columns: &[S],
    vendor: &Vendor,
    version: Option<ServerVersion>,
    catalog: &dyn ColumnCatalog,
) -> Vec<IndexHint> {
    indexed_columns
        .iter()
        .map(|column| {
            let column = column.as_ref();
            let limited = is_index_length_limited(column, vendor, version, catalog);
            IndexHint {
                column: column.to_string(),
                prefix_length: limited.then_some(INDEX_PREFIX_LENGTH),
            }
        })
        .collect()
}

/// Column type for JSON documents: native `JSON` when available, text otherwise.
pub fn json_column_type(vendor: &Vendor, version: Option<ServerVersion>) -> DataType {
    if is_json_supported(vendor, version) {
        DataType::Json
    } else {
        DataType::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::schema::catalog::{AUDIT_TABLE_INDEXED_COLUMNS, TableCatalog};

    fn prefixes(hints: &[IndexHint]) -> Vec<(&str, Option<u32>)> {
        hints
            .iter()
            .map(|h| (h.column.as_str(), h.prefix_length))
            .collect()
    }

    #[test]
    fn test_audit_table_on_old_mysql() {
        let catalog = TableCatalog::audit_table();
        let hints = index_hints(
            &AUDIT_TABLE_INDEXED_COLUMNS,
            &Vendor::MySql,
            Some(ServerVersion::new(5, 6, 51)),
            &catalog,
        );

        assert_eq!(
            prefixes(&hints),
            vec![
                ("type", None),
                ("object_id", Some(191)),
                ("discriminator", Some(191)),
                ("transaction_hash", None),
                ("blame_id", Some(191)),
                ("created_at", None),
            ]
        );
        assert_eq!(hints[1].to_sql(), "object_id(191)");
        assert_eq!(hints[0].to_sql(), "type");
    }

    #[test]
    fn test_audit_table_on_current_servers() {
        let catalog = TableCatalog::audit_table();
        for (vendor, version) in [
            (Vendor::MySql, ServerVersion::new(8, 0, 36)),
            (Vendor::MariaDb, ServerVersion::new(10, 6, 16)),
        ] {
            let hints = index_hints(&AUDIT_TABLE_INDEXED_COLUMNS, &vendor, Some(version), &catalog);
            assert!(hints.iter().all(|h| h.prefix_length.is_none()), "{vendor}");
        }
    }

    #[test]
    fn test_json_column_type() {
        assert_eq!(
            json_column_type(&Vendor::MariaDb, Some(ServerVersion::new(10, 1, 0))),
            DataType::Text
        );
        assert_eq!(json_column_type(&Vendor::MariaDb, None), DataType::Json);
        assert_eq!(
            json_column_type(&Vendor::MySql, Some(ServerVersion::new(5, 6, 0))),
            DataType::Json
        );
    }
}
