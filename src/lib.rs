//! Taskboard: task tracking with role-aware visibility and dashboards.
//!
//! This crate provides the data-access and synchronization layer for a
//! small task-management system: CRUD over tasks with creator/assignee
//! visibility, display-name enrichment, an explicit listing cache, and
//! pure dashboard aggregation.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`identity`]: Shared user identity and actor types
//! - [`task`]: Task records, access service, and listing cache
//! - [`directory`]: Profiles, role assignments, and the user roster
//! - [`dashboard`]: Pure aggregation over task sets

pub mod dashboard;
pub mod directory;
pub mod identity;
pub mod task;
