//! Diesel row models for directory persistence.

use super::schema::{profiles, user_roles};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for profile records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProfileRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Optional full name.
    pub full_name: Option<String>,
    /// Email address.
    pub email: String,
    /// Join timestamp.
    pub created_at: DateTime<Utc>,
}

/// Query result row for role grants.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = user_roles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRoleRow {
    /// Holder of the role.
    pub user_id: uuid::Uuid,
    /// Granted role tag.
    pub role: String,
}
