//! In-memory directory for roster and enrichment tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directory::{
    domain::{Profile, Role, RoleAssignment},
    ports::{DirectoryError, DirectoryRepository, DirectoryResult},
};
use crate::identity::UserId;

/// Thread-safe in-memory directory repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    state: Arc<RwLock<InMemoryDirectoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryDirectoryState {
    profiles: HashMap<UserId, Profile>,
    assignments: Vec<RoleAssignment>,
}

impl InMemoryDirectory {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a profile, replacing any existing entry for the same user.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] when the directory lock is
    /// poisoned.
    pub fn insert_profile(&self, profile: Profile) -> DirectoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.profiles.insert(profile.id(), profile);
        Ok(())
    }

    /// Seeds an explicit role grant.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] when the directory lock is
    /// poisoned.
    pub fn assign_role(&self, user_id: UserId, role: Role) -> DirectoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.assignments.push(RoleAssignment { user_id, role });
        Ok(())
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> DirectoryError {
    DirectoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl DirectoryRepository for InMemoryDirectory {
    async fn list_profiles(&self) -> DirectoryResult<Vec<Profile>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut profiles: Vec<Profile> = state.profiles.values().cloned().collect();
        profiles.sort_by(|a, b| a.created_at().cmp(&b.created_at()));
        Ok(profiles)
    }

    async fn find_profiles(&self, ids: &[UserId]) -> DirectoryResult<Vec<Profile>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(ids
            .iter()
            .filter_map(|id| state.profiles.get(id).cloned())
            .collect())
    }

    async fn list_role_assignments(&self) -> DirectoryResult<Vec<RoleAssignment>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.assignments.clone())
    }
}
