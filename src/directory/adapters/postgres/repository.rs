//! `PostgreSQL` repository implementation for directory lookup.

use super::{
    models::{ProfileRow, UserRoleRow},
    schema::{profiles, user_roles},
};
use crate::directory::{
    domain::{Profile, Role, RoleAssignment},
    ports::{DirectoryError, DirectoryRepository, DirectoryResult},
};
use crate::identity::UserId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by directory adapters.
pub type DirectoryPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed directory repository.
#[derive(Debug, Clone)]
pub struct PostgresDirectory {
    pool: DirectoryPgPool,
}

impl PostgresDirectory {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DirectoryPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> DirectoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> DirectoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(DirectoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(DirectoryError::persistence)?
    }
}

#[async_trait]
impl DirectoryRepository for PostgresDirectory {
    async fn list_profiles(&self) -> DirectoryResult<Vec<Profile>> {
        self.run_blocking(|connection| {
            let rows = profiles::table
                .order(profiles::created_at.asc())
                .select(ProfileRow::as_select())
                .load::<ProfileRow>(connection)
                .map_err(DirectoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_profile).collect())
        })
        .await
    }

    async fn find_profiles(&self, ids: &[UserId]) -> DirectoryResult<Vec<Profile>> {
        let id_uuids: Vec<uuid::Uuid> = ids.iter().map(|id| id.into_inner()).collect();
        self.run_blocking(move |connection| {
            let rows = profiles::table
                .filter(profiles::id.eq_any(id_uuids))
                .select(ProfileRow::as_select())
                .load::<ProfileRow>(connection)
                .map_err(DirectoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_profile).collect())
        })
        .await
    }

    async fn list_role_assignments(&self) -> DirectoryResult<Vec<RoleAssignment>> {
        self.run_blocking(|connection| {
            let rows = user_roles::table
                .select(UserRoleRow::as_select())
                .load::<UserRoleRow>(connection)
                .map_err(DirectoryError::persistence)?;
            rows.into_iter().map(row_to_assignment).collect()
        })
        .await
    }
}

fn row_to_profile(row: ProfileRow) -> Profile {
    Profile::new(
        UserId::from_uuid(row.id),
        row.full_name,
        row.email,
        row.created_at,
    )
}

fn row_to_assignment(row: UserRoleRow) -> DirectoryResult<RoleAssignment> {
    let role =
        Role::try_from(row.role.as_str()).map_err(DirectoryError::invalid_persisted_data)?;
    Ok(RoleAssignment {
        user_id: UserId::from_uuid(row.user_id),
        role,
    })
}
