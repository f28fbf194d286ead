//! User profile record and display-name resolution.

use crate::identity::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display profile for an authenticated user.
///
/// Profiles exist purely for presentation: task listings join against them
/// client-side because the store performs no server-side join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    id: UserId,
    full_name: Option<String>,
    email: String,
    created_at: DateTime<Utc>,
}

impl Profile {
    /// Creates a profile record.
    #[must_use]
    pub fn new(
        id: UserId,
        full_name: Option<String>,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            full_name,
            email: email.into(),
            created_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the full name, if one was provided.
    #[must_use]
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the join timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the name to display for this user: the full name when
    /// present and non-blank, else the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}
