//! In-memory adapters for directory lookup.

mod directory;

pub use directory::InMemoryDirectory;
