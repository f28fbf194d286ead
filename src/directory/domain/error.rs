//! Error types for directory domain parsing.

use thiserror::Error;

/// Error returned while parsing role tags from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
