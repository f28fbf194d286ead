//! Dashboard aggregation over listings produced by the access service.

use super::helpers::{World, world};
use mockable::DefaultClock;
use rstest::rstest;
use taskboard::dashboard::{TimezonePolicy, status_distribution, task_stats};
use taskboard::identity::{Actor, UserId};
use taskboard::task::domain::{StatusFilter, TaskStatus};
use taskboard::task::services::CreateTaskRequest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stats_reflect_the_current_listing_snapshot(world: World) {
    let actor = Actor::member(UserId::new());
    for (title, status) in [
        ("a", TaskStatus::Pending),
        ("b", TaskStatus::Pending),
        ("c", TaskStatus::InProgress),
        ("d", TaskStatus::Completed),
    ] {
        world
            .service
            .create(&actor, CreateTaskRequest::new(title).with_status(status))
            .await
            .expect("task creation should succeed");
    }

    let listing = world
        .service
        .list(&actor, StatusFilter::All)
        .await
        .expect("listing should succeed");
    let tasks: Vec<_> = listing
        .iter()
        .map(|enriched| enriched.task().clone())
        .collect();

    let stats = task_stats(&tasks, &DefaultClock, TimezonePolicy::Utc);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.overdue, 0);

    let slices = status_distribution(&tasks);
    let total_in_slices: usize = slices.iter().map(|slice| slice.count).sum();
    assert_eq!(total_in_slices, 4);
}
