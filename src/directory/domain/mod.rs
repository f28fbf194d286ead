//! Domain model for user profiles and role assignments.

mod error;
mod profile;
mod role;

pub use error::ParseRoleError;
pub use profile::Profile;
pub use role::{Role, RoleAssignment, UserAccount};
