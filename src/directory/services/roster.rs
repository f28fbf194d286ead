//! Service layer for the admin user roster.

use crate::directory::{
    domain::{Role, UserAccount},
    ports::{DirectoryError, DirectoryRepository},
};
use crate::identity::UserId;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for roster operations.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Directory lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Result type for roster service operations.
pub type RosterResult<T> = Result<T, RosterError>;

/// Read-only composition of profiles and role assignments.
#[derive(Clone)]
pub struct RosterService<D>
where
    D: DirectoryRepository,
{
    directory: Arc<D>,
}

impl<D> RosterService<D>
where
    D: DirectoryRepository,
{
    /// Creates a new roster service.
    #[must_use]
    pub const fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Returns every user with their resolved role tags.
    ///
    /// Users without an explicit role assignment carry the default
    /// `[Role::User]`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Directory`] when a directory lookup fails.
    pub async fn list_users(&self) -> RosterResult<Vec<UserAccount>> {
        let profiles = self.directory.list_profiles().await?;
        let assignments = self.directory.list_role_assignments().await?;

        let mut roles_by_user: HashMap<UserId, Vec<Role>> = HashMap::new();
        for assignment in assignments {
            roles_by_user
                .entry(assignment.user_id)
                .or_default()
                .push(assignment.role);
        }

        Ok(profiles
            .into_iter()
            .map(|profile| {
                let roles = roles_by_user.remove(&profile.id()).unwrap_or_default();
                UserAccount::new(profile, roles)
            })
            .collect())
    }

    /// Returns the resolved role tags for a single user.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Directory`] when a directory lookup fails.
    pub async fn roles_for(&self, user_id: UserId) -> RosterResult<Vec<Role>> {
        let assignments = self.directory.list_role_assignments().await?;
        let mut roles: Vec<Role> = assignments
            .into_iter()
            .filter(|assignment| assignment.user_id == user_id)
            .map(|assignment| assignment.role)
            .collect();
        if roles.is_empty() {
            roles.push(Role::User);
        }
        roles.sort_unstable();
        roles.dedup();
        Ok(roles)
    }
}
