use crate::core::data_type::DataType;
use serde::{Deserialize, Serialize};

/// Declared shape of a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    #[serde(rename = "type")]
    pub data_type: DataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
}

impl ColumnSpec {
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            length: None,
        }
    }

    pub fn string(length: u32) -> Self {
        Self {
            data_type: DataType::String,
            length: Some(length),
        }
    }

    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }
}
