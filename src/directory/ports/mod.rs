//! Port contracts for directory lookup.

pub mod repository;

pub use repository::{DirectoryError, DirectoryRepository, DirectoryResult};
