//! User profiles and role assignments.
//!
//! This module resolves display names for task enrichment and composes the
//! read-only admin roster: every profile joined with its explicit role
//! grants, defaulting to the `user` role. Account and grant management
//! belong to the external identity collaborator and are not exposed here.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Composition services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
