//! Application services for directory composition.

mod roster;

pub use roster::{RosterError, RosterResult, RosterService};
