//! Task records and the data-access layer around them.
//!
//! This module implements task CRUD with role-aware visibility: listings
//! are fetched newest first, filtered by status at the store, scoped to
//! the acting user's visibility, enriched with display names, and cached
//! under an explicit invalidation contract. Creator identity is assigned
//! at the service boundary and is immutable thereafter. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
