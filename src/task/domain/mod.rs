//! Domain model for task records.
//!
//! The task domain models validated creation, partial mutation, and the
//! listing vocabulary (status filter and visibility scope) while keeping
//! all infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod listing;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use listing::{ListingScope, StatusFilter};
pub use status::TaskStatus;
pub use task::{NewTaskData, PersistedTaskData, Task, TaskPatch};
