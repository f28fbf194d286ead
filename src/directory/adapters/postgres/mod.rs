//! `PostgreSQL` adapters for directory lookup.

mod models;
mod repository;
mod schema;

pub use repository::{DirectoryPgPool, PostgresDirectory};
