//! Application services for task access and listing consistency.

mod access;
mod cache;

pub use access::{
    CreateTaskRequest, EnrichedTask, TaskAccessError, TaskAccessResult, TaskAccessService,
};
pub use cache::{ListingCache, ListingKey};
