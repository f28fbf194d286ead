//! Query vocabulary for task listings: status filters and visibility scope.

use super::TaskStatus;
use crate::identity::{Actor, UserId};
use std::fmt;

/// Status filter applied to a task listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    /// Include tasks of every status.
    All,
    /// Include only tasks with the given status.
    Only(TaskStatus),
}

impl StatusFilter {
    /// Returns whether the given status passes the filter.
    #[must_use]
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => status == wanted,
        }
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::All
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(status) => f.write_str(status.as_str()),
        }
    }
}

/// Visibility scope applied to a task listing.
///
/// Admins see every task; members see tasks they created or are assigned.
/// The scope is enforced by repositories so that visibility is a property
/// of the store boundary rather than of any rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingScope {
    /// No visibility restriction.
    All,
    /// Restrict to tasks created by or assigned to the given user.
    User(UserId),
}

impl ListingScope {
    /// Derives the scope granted to an actor.
    #[must_use]
    pub const fn for_actor(actor: &Actor) -> Self {
        if actor.is_admin() {
            Self::All
        } else {
            Self::User(actor.user_id())
        }
    }

    /// Returns whether a task with the given creator and assignee is
    /// visible under this scope.
    #[must_use]
    pub fn permits(self, assigned_by: UserId, assigned_to: UserId) -> bool {
        match self {
            Self::All => true,
            Self::User(user) => assigned_by == user || assigned_to == user,
        }
    }
}
