//! Aggregation tests: headline counts, overdue edges, and the histogram.

use crate::dashboard::{
    TimezonePolicy, creation_histogram, is_overdue, status_distribution, task_stats,
};
use crate::identity::UserId;
use crate::task::domain::{PersistedTaskData, Task, TaskId, TaskStatus, TaskTitle};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use mockable::Clock;
use rstest::rstest;

/// Clock pinned to a caller-chosen instant.
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

fn instant(value: &str) -> DateTime<Utc> {
    value.parse().expect("valid RFC 3339 timestamp")
}

fn date(value: &str) -> NaiveDate {
    value.parse().expect("valid ISO date")
}

fn task(status: TaskStatus, created_at: &str, due_date: Option<&str>) -> Task {
    let user = UserId::new();
    let created = instant(created_at);
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: TaskTitle::new("fixture").expect("valid title"),
        description: String::new(),
        status,
        due_date: due_date.map(instant),
        assigned_by: user,
        assigned_to: user,
        created_at: created,
        updated_at: created,
    })
}

#[rstest]
fn stats_count_statuses_and_overdue() {
    let clock = FixedClock(instant("2024-06-01T12:00:00Z"));
    let mut tasks = vec![
        // Two of the non-completed tasks are overdue.
        task(TaskStatus::Pending, "2024-05-20T10:00:00Z", Some("2024-05-25T10:00:00Z")),
        task(TaskStatus::InProgress, "2024-05-21T10:00:00Z", Some("2024-01-01T00:00:00Z")),
        task(TaskStatus::Pending, "2024-05-22T10:00:00Z", None),
        task(TaskStatus::Pending, "2024-05-23T10:00:00Z", Some("2024-07-01T00:00:00Z")),
        task(TaskStatus::InProgress, "2024-05-24T10:00:00Z", None),
        task(TaskStatus::InProgress, "2024-05-25T10:00:00Z", None),
        task(TaskStatus::InProgress, "2024-05-26T10:00:00Z", Some("2024-06-01T08:00:00Z")),
    ];
    // Completed tasks never count as overdue, past due date or not.
    tasks.push(task(
        TaskStatus::Completed,
        "2024-05-27T10:00:00Z",
        Some("2024-01-01T00:00:00Z"),
    ));
    tasks.push(task(TaskStatus::Completed, "2024-05-28T10:00:00Z", None));
    tasks.push(task(TaskStatus::Completed, "2024-05-29T10:00:00Z", None));

    let stats = task_stats(&tasks, &clock, TimezonePolicy::Utc);

    assert_eq!(stats.total, 10);
    assert_eq!(stats.pending, 3);
    assert_eq!(stats.in_progress, 4);
    assert_eq!(stats.completed, 3);
    assert_eq!(stats.overdue, 2);
}

#[rstest]
fn past_due_date_is_overdue_but_its_own_day_is_not() {
    let subject = task(TaskStatus::Pending, "2023-12-01T00:00:00Z", Some("2024-01-01T12:00:00Z"));

    assert!(is_overdue(&subject, date("2024-06-01"), TimezonePolicy::Utc));
    assert!(!is_overdue(&subject, date("2024-01-01"), TimezonePolicy::Utc));
}

#[rstest]
fn completed_tasks_are_never_overdue() {
    let subject = task(
        TaskStatus::Completed,
        "2023-12-01T00:00:00Z",
        Some("2024-01-01T12:00:00Z"),
    );

    assert!(!is_overdue(&subject, date("2024-06-01"), TimezonePolicy::Utc));
}

#[rstest]
fn tasks_without_a_due_date_are_never_overdue() {
    let subject = task(TaskStatus::Pending, "2023-12-01T00:00:00Z", None);

    assert!(!is_overdue(&subject, date("2024-06-01"), TimezonePolicy::Utc));
}

#[rstest]
fn distribution_omits_empty_statuses() {
    let tasks = vec![
        task(TaskStatus::Pending, "2024-05-20T10:00:00Z", None),
        task(TaskStatus::Completed, "2024-05-21T10:00:00Z", None),
        task(TaskStatus::Completed, "2024-05-22T10:00:00Z", None),
    ];

    let slices = status_distribution(&tasks);

    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].status, TaskStatus::Pending);
    assert_eq!(slices[0].count, 1);
    assert_eq!(slices[1].status, TaskStatus::Completed);
    assert_eq!(slices[1].count, 2);
}

#[rstest]
fn distribution_of_no_tasks_is_empty() {
    assert!(status_distribution(&[]).is_empty());
}

#[rstest]
fn histogram_covers_seven_days_ending_today() {
    let clock = FixedClock(instant("2024-06-07T12:00:00Z"));
    let tasks = vec![
        task(TaskStatus::Pending, "2024-06-07T08:00:00Z", None),
        task(TaskStatus::Pending, "2024-06-07T20:00:00Z", None),
        task(TaskStatus::Pending, "2024-06-01T00:30:00Z", None),
        // Outside the window: eight days ago.
        task(TaskStatus::Pending, "2024-05-30T12:00:00Z", None),
    ];

    let buckets = creation_histogram(&tasks, &clock, TimezonePolicy::Utc);

    assert_eq!(buckets.len(), 7);
    assert_eq!(buckets[0].date, date("2024-06-01"));
    assert_eq!(buckets[6].date, date("2024-06-07"));
    assert_eq!(buckets[0].count, 1);
    assert_eq!(buckets[6].count, 2);
    let middle_total: usize = buckets[1..6].iter().map(|bucket| bucket.count).sum();
    assert_eq!(middle_total, 0);
}

#[rstest]
fn timezone_policy_moves_bucket_boundaries() {
    let late_evening = task(TaskStatus::Pending, "2024-06-01T23:30:00Z", None);
    let plus_two = TimezonePolicy::Fixed(
        FixedOffset::east_opt(2 * 3600).expect("valid offset"),
    );

    assert_eq!(
        TimezonePolicy::Utc.date_of(instant("2024-06-01T23:30:00Z")),
        date("2024-06-01")
    );
    assert_eq!(
        plus_two.date_of(instant("2024-06-01T23:30:00Z")),
        date("2024-06-02")
    );

    let clock = FixedClock(instant("2024-06-01T23:30:00Z"));
    let utc_buckets = creation_histogram(
        std::slice::from_ref(&late_evening),
        &clock,
        TimezonePolicy::Utc,
    );
    let shifted_buckets = creation_histogram(
        std::slice::from_ref(&late_evening),
        &clock,
        plus_two,
    );

    assert_eq!(utc_buckets[6].date, date("2024-06-01"));
    assert_eq!(utc_buckets[6].count, 1);
    assert_eq!(shifted_buckets[6].date, date("2024-06-02"));
    assert_eq!(shifted_buckets[6].count, 1);
    assert_eq!(shifted_buckets[5].date, date("2024-06-01"));
    assert_eq!(shifted_buckets[5].count, 0);
}
