//! Repository port for profile and role-assignment lookup.

use crate::directory::domain::{Profile, RoleAssignment};
use crate::identity::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory repository operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Profile and role lookup contract.
///
/// The directory is read-only from this crate's perspective: accounts and
/// role grants are managed by the external identity collaborator.
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Returns every profile.
    async fn list_profiles(&self) -> DirectoryResult<Vec<Profile>>;

    /// Returns the profiles matching the given identifiers, in one batch.
    ///
    /// Unknown identifiers are silently absent from the result.
    async fn find_profiles(&self, ids: &[UserId]) -> DirectoryResult<Vec<Profile>>;

    /// Returns every explicit role assignment.
    async fn list_role_assignments(&self) -> DirectoryResult<Vec<RoleAssignment>>;
}

/// Errors returned by directory repository implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
