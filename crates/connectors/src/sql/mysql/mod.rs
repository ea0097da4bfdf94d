//! MySQL and MariaDB servers, reached through `mysql_async`.

pub mod adapter;
pub mod platform;
pub mod probe;
