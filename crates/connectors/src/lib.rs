pub mod error;
pub mod sql;
