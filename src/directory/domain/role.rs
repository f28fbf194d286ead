//! Role tags, per-user assignments, and the composed roster entry.

use super::{ParseRoleError, Profile};
use crate::identity::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Access role tag.
///
/// `Admin` grants visibility over all tasks; `User` limits visibility to
/// tasks the holder created or is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Elevated visibility over all tasks.
    Admin,
    /// Default member access.
    User,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

/// Explicit role grant for a user.
///
/// A user may hold several assignments; a user with none defaults to
/// [`Role::User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleAssignment {
    /// Holder of the role.
    pub user_id: UserId,
    /// Granted role tag.
    pub role: Role,
}

/// Roster entry composing a profile with its resolved role tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    profile: Profile,
    roles: Vec<Role>,
}

impl UserAccount {
    /// Composes a roster entry, sorting and de-duplicating roles and
    /// defaulting to `[Role::User]` when no assignment exists.
    #[must_use]
    pub fn new(profile: Profile, mut roles: Vec<Role>) -> Self {
        if roles.is_empty() {
            roles.push(Role::User);
        }
        roles.sort_unstable();
        roles.dedup();
        Self { profile, roles }
    }

    /// Returns the profile.
    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Returns the resolved role tags.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Returns whether the account holds the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.roles.contains(&Role::Admin)
    }
}
