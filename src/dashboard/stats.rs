//! Pure aggregation over task sets: counts, distribution, and histogram.

use super::TimezonePolicy;
use crate::task::domain::{Task, TaskStatus};
use chrono::{Days, NaiveDate};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Number of calendar days covered by the creation histogram.
const HISTOGRAM_DAYS: usize = 7;

/// Headline counts for a task set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    /// All tasks.
    pub total: usize,
    /// Tasks with status `pending`.
    pub pending: usize,
    /// Tasks with status `in_progress`.
    pub in_progress: usize,
    /// Tasks with status `completed`.
    pub completed: usize,
    /// Uncompleted tasks whose due day has passed.
    pub overdue: usize,
}

/// One status slice of the distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSlice {
    /// Status this slice counts.
    pub status: TaskStatus,
    /// Number of tasks holding the status.
    pub count: usize,
}

/// One calendar-day bucket of the creation histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBucket {
    /// Calendar day under the chosen timezone policy.
    pub date: NaiveDate,
    /// Number of tasks created on that day.
    pub count: usize,
}

/// Returns whether a task is overdue on the given day.
///
/// A task is overdue when it carries a due date whose calendar day is
/// strictly before `today` and it is not completed. A task due today is
/// not overdue.
#[must_use]
pub fn is_overdue(task: &Task, today: NaiveDate, policy: TimezonePolicy) -> bool {
    task.status() != TaskStatus::Completed
        && task
            .due_date()
            .is_some_and(|due| policy.date_of(due) < today)
}

/// Computes headline counts for the task set.
///
/// Recomputed from scratch on every call; the dashboard holds no state of
/// its own.
#[must_use]
pub fn task_stats(tasks: &[Task], clock: &impl Clock, policy: TimezonePolicy) -> TaskStats {
    let today = policy.today(clock);
    let count_status =
        |status: TaskStatus| tasks.iter().filter(|task| task.status() == status).count();

    TaskStats {
        total: tasks.len(),
        pending: count_status(TaskStatus::Pending),
        in_progress: count_status(TaskStatus::InProgress),
        completed: count_status(TaskStatus::Completed),
        overdue: tasks
            .iter()
            .filter(|task| is_overdue(task, today, policy))
            .count(),
    }
}

/// Computes the status distribution, omitting statuses with no tasks.
#[must_use]
pub fn status_distribution(tasks: &[Task]) -> Vec<StatusSlice> {
    [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ]
    .into_iter()
    .map(|status| StatusSlice {
        status,
        count: tasks.iter().filter(|task| task.status() == status).count(),
    })
    .filter(|slice| slice.count > 0)
    .collect()
}

/// Computes the rolling creation histogram: seven buckets, oldest first,
/// ending on the current day under the policy.
#[must_use]
pub fn creation_histogram(
    tasks: &[Task],
    clock: &impl Clock,
    policy: TimezonePolicy,
) -> Vec<HistogramBucket> {
    let today = policy.today(clock);
    // Six days back plus today spans the seven-bucket window.
    let start = today.checked_sub_days(Days::new(6)).unwrap_or(today);

    start
        .iter_days()
        .take(HISTOGRAM_DAYS)
        .map(|day| HistogramBucket {
            date: day,
            count: tasks
                .iter()
                .filter(|task| policy.date_of(task.created_at()) == day)
                .count(),
        })
        .collect()
}
