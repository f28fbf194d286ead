//! Pure dashboard aggregation over task sets.
//!
//! Every function here is a pure read over a caller-supplied slice of
//! tasks: status counts, overdue classification, the status distribution,
//! and a seven-day creation histogram. Nothing is persisted and nothing
//! refreshes itself; callers recompute from a fresh listing snapshot.
//! Calendar-day boundaries are governed by an explicit [`TimezonePolicy`].

mod stats;
mod timezone;

pub use stats::{
    HistogramBucket, StatusSlice, TaskStats, creation_histogram, is_overdue, status_distribution,
    task_stats,
};
pub use timezone::TimezonePolicy;

#[cfg(test)]
mod tests;
