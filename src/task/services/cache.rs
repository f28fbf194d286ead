//! Explicit listing cache keyed by acting user, filter, and admin flag.
//!
//! The cache has an explicit contract: reads return only fresh entries,
//! mutations mark every entry stale, and the next listing refetches. There
//! is no hidden refresh.

use super::access::EnrichedTask;
use crate::identity::{Actor, UserId};
use crate::task::domain::StatusFilter;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::RwLock;

/// Cache key for one cached listing.
///
/// The acting user is part of the key: entries cached for one member must
/// never serve another, and an actor's admin flag changes the visible set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListingKey {
    user: UserId,
    filter: StatusFilter,
    admin: bool,
}

impl ListingKey {
    /// Derives the cache key for an actor's filtered listing.
    #[must_use]
    pub const fn for_actor(actor: &Actor, filter: StatusFilter) -> Self {
        Self {
            user: actor.user_id(),
            filter,
            admin: actor.is_admin(),
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    tasks: Vec<EnrichedTask>,
    fetched_at: DateTime<Utc>,
    stale: bool,
}

/// Shared cache of enriched task listings.
///
/// A poisoned lock degrades to a cache miss on read and a no-op on write;
/// the next listing refetches from the repository.
#[derive(Debug, Default)]
pub struct ListingCache {
    entries: RwLock<HashMap<ListingKey, CacheEntry>>,
}

impl ListingCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached listing for the key when present and fresh.
    #[must_use]
    pub fn get_fresh(&self, key: &ListingKey) -> Option<Vec<EnrichedTask>> {
        let entries = self.entries.read().ok()?;
        entries
            .get(key)
            .filter(|entry| !entry.stale)
            .map(|entry| entry.tasks.clone())
    }

    /// Stores a freshly fetched listing under the key.
    pub fn store(&self, key: ListingKey, tasks: Vec<EnrichedTask>, fetched_at: DateTime<Utc>) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(
                key,
                CacheEntry {
                    tasks,
                    fetched_at,
                    stale: false,
                },
            );
        }
    }

    /// Marks every cached listing stale and drops its superseded data.
    ///
    /// Called after any successful mutation: a write under one filter can
    /// change the result of a listing under any other. A stale entry keeps
    /// only its fetch timestamp until the next listing overwrites it, so
    /// superseded task vectors do not stay resident.
    pub fn invalidate_all(&self) {
        if let Ok(mut entries) = self.entries.write() {
            for entry in entries.values_mut() {
                entry.stale = true;
                entry.tasks = Vec::new();
            }
        }
    }

    /// Returns when the entry for the key was last fetched, fresh or stale.
    #[must_use]
    pub fn fetched_at(&self, key: &ListingKey) -> Option<DateTime<Utc>> {
        let entries = self.entries.read().ok()?;
        entries.get(key).map(|entry| entry.fetched_at)
    }
}
