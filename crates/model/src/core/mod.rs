pub mod data_type;
pub mod vendor;
pub mod version;
