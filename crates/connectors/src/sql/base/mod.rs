pub mod capabilities;
pub mod error;
pub mod hints;
pub mod probe;
pub mod report;
