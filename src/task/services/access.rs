//! Service layer for task listing, creation, mutation, and deletion.
//!
//! This is the consistency boundary of the crate: every operation is one
//! store round trip with no retries and no conflict resolution (last write
//! wins), and every successful mutation invalidates all cached listings.
//! Authorization is enforced here rather than by any rendering layer.

use super::cache::{ListingCache, ListingKey};
use crate::directory::ports::{DirectoryError, DirectoryRepository};
use crate::identity::{Actor, UserId};
use crate::task::{
    domain::{
        ListingScope, NewTaskData, StatusFilter, Task, TaskDomainError, TaskId, TaskPatch,
        TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Display name used when a referenced profile cannot be resolved.
const UNKNOWN_NAME: &str = "Unknown";

/// Task record enriched with resolved display names for its creator and
/// assignee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedTask {
    task: Task,
    assigned_by_name: String,
    assigned_to_name: String,
}

impl EnrichedTask {
    /// Returns the underlying task record.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the creator's display name.
    #[must_use]
    pub fn assigned_by_name(&self) -> &str {
        &self.assigned_by_name
    }

    /// Returns the assignee's display name.
    #[must_use]
    pub fn assigned_to_name(&self) -> &str {
        &self.assigned_to_name
    }
}

/// Request payload for creating a task.
///
/// There is deliberately no creator field: `assigned_by` is always taken
/// from the acting identity, never from the caller's payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    status: Option<TaskStatus>,
    due_date: Option<DateTime<Utc>>,
    assigned_to: Option<UserId>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
            due_date: None,
            assigned_to: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the assignee. Defaults to the acting user when unset.
    #[must_use]
    pub const fn with_assigned_to(mut self, user: UserId) -> Self {
        self.assigned_to = Some(user);
        self
    }
}

/// Service-level errors for task access operations.
#[derive(Debug, Error)]
pub enum TaskAccessError {
    /// Domain validation failed before any store call was issued.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Directory lookup for display-name enrichment failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    /// The acting user is not permitted to perform this operation.
    #[error("user {user} is not permitted to modify task {id}")]
    Forbidden {
        /// Task the operation targeted.
        id: TaskId,
        /// Acting user that was refused.
        user: UserId,
    },
}

/// Result type for task access operations.
pub type TaskAccessResult<T> = Result<T, TaskAccessError>;

/// Task read/write orchestration with enrichment and explicit caching.
#[derive(Clone)]
pub struct TaskAccessService<T, D, C>
where
    T: TaskRepository,
    D: DirectoryRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    directory: Arc<D>,
    cache: Arc<ListingCache>,
    clock: Arc<C>,
}

impl<T, D, C> TaskAccessService<T, D, C>
where
    T: TaskRepository,
    D: DirectoryRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task access service with an empty listing cache.
    #[must_use]
    pub fn new(tasks: Arc<T>, directory: Arc<D>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            directory,
            cache: Arc::new(ListingCache::new()),
            clock,
        }
    }

    /// Returns the actor's filtered listing, newest first, with display
    /// names resolved.
    ///
    /// Fresh cached listings are served without a store round trip; a
    /// listing fetched here may be stale relative to a mutation that
    /// landed after it was cached, until the mutation's invalidation is
    /// observed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::Repository`] when the task fetch fails or
    /// [`TaskAccessError::Directory`] when profile resolution fails.
    pub async fn list(
        &self,
        actor: &Actor,
        filter: StatusFilter,
    ) -> TaskAccessResult<Vec<EnrichedTask>> {
        let key = ListingKey::for_actor(actor, filter);
        if let Some(cached) = self.cache.get_fresh(&key) {
            debug!(user = %actor.user_id(), %filter, "listing served from cache");
            return Ok(cached);
        }

        let scope = ListingScope::for_actor(actor);
        let tasks = self.tasks.list(filter, scope).await?;
        let enriched = self.enrich(tasks).await?;
        self.cache.store(key, enriched.clone(), self.clock.utc());
        debug!(user = %actor.user_id(), %filter, count = enriched.len(), "listing fetched");
        Ok(enriched)
    }

    /// Creates a task on behalf of the actor.
    ///
    /// The creator is always the acting user; the assignee defaults to the
    /// acting user when the request names none. All cached listings are
    /// invalidated on success.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::Domain`] when the title is empty (checked
    /// before any store call) or [`TaskAccessError::Repository`] when the
    /// write is rejected.
    pub async fn create(&self, actor: &Actor, request: CreateTaskRequest) -> TaskAccessResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            status,
            due_date,
            assigned_to,
        } = request;
        let validated_title = TaskTitle::new(title)?;

        let task = Task::new(
            NewTaskData {
                title: validated_title,
                description: description.unwrap_or_default(),
                status: status.unwrap_or_default(),
                due_date,
                assigned_by: actor.user_id(),
                assigned_to: assigned_to.unwrap_or(actor.user_id()),
            },
            &*self.clock,
        );
        self.tasks.insert(&task).await?;
        self.cache.invalidate_all();
        info!(id = %task.id(), user = %actor.user_id(), "task created");
        Ok(task)
    }

    /// Applies a partial update to a task.
    ///
    /// The actor must be an admin, the creator, or the assignee. An empty
    /// patch leaves every field unchanged except `updated_at`. All cached
    /// listings are invalidated on success.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the task does not exist, or
    /// [`TaskAccessError::Forbidden`] when the actor holds no claim on it.
    pub async fn update(
        &self,
        actor: &Actor,
        id: TaskId,
        patch: TaskPatch,
    ) -> TaskAccessResult<Task> {
        let mut task = self.find_by_id_or_error(id).await?;
        let claims_task =
            actor.user_id() == task.assigned_by() || actor.user_id() == task.assigned_to();
        if !actor.is_admin() && !claims_task {
            warn!(%id, user = %actor.user_id(), "update refused");
            return Err(TaskAccessError::Forbidden {
                id,
                user: actor.user_id(),
            });
        }

        task.apply(patch, &*self.clock);
        self.tasks.update(&task).await?;
        self.cache.invalidate_all();
        info!(%id, user = %actor.user_id(), "task updated");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// Only the task's creator may delete it; the check lives here at the
    /// store boundary, not in any presentation layer. All cached listings
    /// are invalidated on success.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAccessError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the task does not exist, or
    /// [`TaskAccessError::Forbidden`] when the actor is not the creator.
    pub async fn delete(&self, actor: &Actor, id: TaskId) -> TaskAccessResult<()> {
        let task = self.find_by_id_or_error(id).await?;
        if task.assigned_by() != actor.user_id() {
            warn!(%id, user = %actor.user_id(), "delete refused");
            return Err(TaskAccessError::Forbidden {
                id,
                user: actor.user_id(),
            });
        }

        self.tasks.delete(id).await?;
        self.cache.invalidate_all();
        info!(%id, user = %actor.user_id(), "task deleted");
        Ok(())
    }

    async fn find_by_id_or_error(&self, id: TaskId) -> TaskAccessResult<Task> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }

    /// Resolves display names for every creator and assignee referenced by
    /// the given tasks in a single batch profile lookup.
    async fn enrich(&self, tasks: Vec<Task>) -> TaskAccessResult<Vec<EnrichedTask>> {
        let referenced: BTreeSet<UserId> = tasks
            .iter()
            .flat_map(|task| [task.assigned_by(), task.assigned_to()])
            .collect();
        let ids: Vec<UserId> = referenced.into_iter().collect();
        let profiles = self.directory.find_profiles(&ids).await?;

        let names: HashMap<UserId, String> = profiles
            .into_iter()
            .map(|profile| (profile.id(), profile.display_name().to_owned()))
            .collect();
        let resolve = |id: UserId| {
            names
                .get(&id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_NAME.to_owned())
        };

        Ok(tasks
            .into_iter()
            .map(|task| {
                let assigned_by_name = resolve(task.assigned_by());
                let assigned_to_name = resolve(task.assigned_to());
                EnrichedTask {
                    task,
                    assigned_by_name,
                    assigned_to_name,
                }
            })
            .collect())
    }
}
