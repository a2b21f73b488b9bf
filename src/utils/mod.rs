pub mod pagination;
pub mod patch;
pub mod random;
pub mod tracing;
pub mod upload;
