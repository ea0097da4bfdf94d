use crate::error::ModelError;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, collections::HashMap, fmt};

/// Portable column type tag, as declared by a schema description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub enum DataType {
    String,
    Text,
    SmallInt,
    Integer,
    BigInt,
    Decimal,
    Float,
    Boolean,
    Json,
    Date,
    DateTime,
    DateTimeImmutable,
    Guid,
    Blob,
    Custom(String),
}

lazy_static! {
    static ref TYPE_TAG_MAP: HashMap<&'static str, DataType> = build_type_tag_map();
}

impl DataType {
    pub fn from_type_tag(tag: &str) -> Result<Self, ModelError> {
        let normalized = Self::normalize_type_tag(tag);
        TYPE_TAG_MAP
            .get(normalized.as_str())
            .cloned()
            .ok_or_else(|| ModelError::UnknownType(tag.to_string()))
    }

    /// Same as [`DataType::from_type_tag`], keeping unknown tags as [`DataType::Custom`].
    pub fn from_type_tag_lossy(tag: &str) -> Self {
        Self::from_type_tag(tag).unwrap_or_else(|_| DataType::Custom(tag.trim().to_string()))
    }

    pub fn type_tag(&self) -> Cow<'_, str> {
        match self {
            DataType::String => Cow::Borrowed("string"),
            DataType::Text => Cow::Borrowed("text"),
            DataType::SmallInt => Cow::Borrowed("smallint"),
            DataType::Integer => Cow::Borrowed("integer"),
            DataType::BigInt => Cow::Borrowed("bigint"),
            DataType::Decimal => Cow::Borrowed("decimal"),
            DataType::Float => Cow::Borrowed("float"),
            DataType::Boolean => Cow::Borrowed("boolean"),
            DataType::Json => Cow::Borrowed("json"),
            DataType::Date => Cow::Borrowed("date"),
            DataType::DateTime => Cow::Borrowed("datetime"),
            DataType::DateTimeImmutable => Cow::Borrowed("datetime_immutable"),
            DataType::Guid => Cow::Borrowed("guid"),
            DataType::Blob => Cow::Borrowed("blob"),
            DataType::Custom(name) => Cow::Borrowed(name),
        }
    }

    /// Column type used for this tag in MySQL/MariaDB DDL.
    pub fn mysql_name(&self) -> Cow<'_, str> {
        match self {
            DataType::String => Cow::Borrowed("VARCHAR"),
            DataType::Text => Cow::Borrowed("LONGTEXT"),
            DataType::SmallInt => Cow::Borrowed("SMALLINT"),
            DataType::Integer => Cow::Borrowed("INT"),
            DataType::BigInt => Cow::Borrowed("BIGINT"),
            DataType::Decimal => Cow::Borrowed("DECIMAL"),
            DataType::Float => Cow::Borrowed("DOUBLE PRECISION"),
            DataType::Boolean => Cow::Borrowed("TINYINT(1)"),
            DataType::Json => Cow::Borrowed("JSON"),
            DataType::Date => Cow::Borrowed("DATE"),
            DataType::DateTime | DataType::DateTimeImmutable => Cow::Borrowed("DATETIME"),
            DataType::Guid => Cow::Borrowed("CHAR(36)"),
            DataType::Blob => Cow::Borrowed("LONGBLOB"),
            DataType::Custom(name) => Cow::Owned(name.to_uppercase()),
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, DataType::String)
    }

    fn normalize_type_tag(tag: &str) -> String {
        tag.trim().to_lowercase()
    }
}

impl TryFrom<String> for DataType {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Ok(DataType::from_type_tag_lossy(&s))
    }
}

impl From<DataType> for String {
    fn from(data_type: DataType) -> Self {
        data_type.type_tag().into_owned()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_tag())
    }
}

fn build_type_tag_map() -> HashMap<&'static str, DataType> {
    use DataType::*;

    let entries = [
        ("string", String),
        ("text", Text),
        ("smallint", SmallInt),
        ("integer", Integer),
        ("int", Integer),
        ("bigint", BigInt),
        ("decimal", Decimal),
        ("float", Float),
        ("boolean", Boolean),
        ("bool", Boolean),
        ("json", Json),
        ("date", Date),
        ("date_immutable", Date),
        ("datetime", DateTime),
        ("datetime_immutable", DateTimeImmutable),
        ("guid", Guid),
        ("uuid", Guid),
        ("blob", Blob),
        ("binary", Blob),
    ];

    entries.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tags_are_case_insensitive() {
        assert_eq!(DataType::from_type_tag("STRING").unwrap(), DataType::String);
        assert_eq!(
            DataType::from_type_tag(" datetime_immutable ").unwrap(),
            DataType::DateTimeImmutable
        );
    }

    #[test]
    fn test_unknown_tag_is_an_error_unless_lossy() {
        assert!(matches!(
            DataType::from_type_tag("geometry"),
            Err(ModelError::UnknownType(tag)) if tag == "geometry"
        ));
        assert_eq!(
            DataType::from_type_tag_lossy("geometry"),
            DataType::Custom("geometry".to_string())
        );
    }

    #[test]
    fn test_serde_uses_type_tags() {
        let parsed: DataType = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(parsed, DataType::Json);
        assert_eq!(serde_json::to_string(&DataType::String).unwrap(), "\"string\"");
    }

    #[test]
    fn test_only_string_tag_is_string() {
        assert!(DataType::String.is_string());
        assert!(!DataType::Text.is_string());
        assert!(!DataType::Custom("string2".into()).is_string());
    }

    #[test]
    fn test_string_like_tags_keep_their_name() {
        for tag in ["ascii_string", "varchar"] {
            let parsed = DataType::from_type_tag_lossy(tag);
            assert_eq!(parsed, DataType::Custom(tag.to_string()));
            assert!(!parsed.is_string());
            assert_eq!(
                serde_json::to_string(&parsed).unwrap(),
                format!("\"{tag}\"")
            );
        }
    }
}
