//! End-to-end task flows through the public crate surface.

use super::helpers::{World, seed_profile, world};
use rstest::rstest;
use taskboard::identity::{Actor, UserId};
use taskboard::task::domain::{StatusFilter, TaskPatch, TaskStatus, TaskTitle};
use taskboard::task::services::{CreateTaskRequest, TaskAccessError};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_task_lifecycle_is_visible_through_listings(world: World) {
    let creator_id = seed_profile(&world.directory, Some("Grace Hopper"), "grace@example.com")
        .expect("profile seeding should succeed");
    let assignee_id = seed_profile(&world.directory, None, "ensign@example.com")
        .expect("profile seeding should succeed");
    let creator = Actor::member(creator_id);

    let created = world
        .service
        .create(
            &creator,
            CreateTaskRequest::new("Draft compiler notes")
                .with_description("First pass only")
                .with_assigned_to(assignee_id),
        )
        .await
        .expect("task creation should succeed");

    let listing = world
        .service
        .list(&creator, StatusFilter::All)
        .await
        .expect("listing should succeed");
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].task().id(), created.id());
    assert_eq!(listing[0].assigned_by_name(), "Grace Hopper");
    assert_eq!(listing[0].assigned_to_name(), "ensign@example.com");

    let updated = world
        .service
        .update(
            &creator,
            created.id(),
            TaskPatch::new()
                .with_title(TaskTitle::new("Publish compiler notes").expect("valid title"))
                .with_status(TaskStatus::InProgress),
        )
        .await
        .expect("update should succeed");
    assert_eq!(updated.title().as_str(), "Publish compiler notes");
    assert_eq!(updated.assigned_by(), creator_id);

    let in_progress = world
        .service
        .list(&creator, StatusFilter::Only(TaskStatus::InProgress))
        .await
        .expect("listing should succeed");
    assert_eq!(in_progress.len(), 1);

    world
        .service
        .delete(&creator, created.id())
        .await
        .expect("delete should succeed");
    let after = world
        .service
        .list(&creator, StatusFilter::All)
        .await
        .expect("listing should succeed");
    assert!(after.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn member_visibility_and_creator_delete_are_enforced_end_to_end(world: World) {
    let alice = Actor::member(UserId::new());
    let bob = Actor::member(UserId::new());
    let admin = Actor::admin(UserId::new());

    let for_bob = world
        .service
        .create(
            &alice,
            CreateTaskRequest::new("Handed to Bob").with_assigned_to(bob.user_id()),
        )
        .await
        .expect("task creation should succeed");
    world
        .service
        .create(&alice, CreateTaskRequest::new("Alice only"))
        .await
        .expect("task creation should succeed");

    let bobs_view = world
        .service
        .list(&bob, StatusFilter::All)
        .await
        .expect("listing should succeed");
    assert_eq!(bobs_view.len(), 1);

    let admins_view = world
        .service
        .list(&admin, StatusFilter::All)
        .await
        .expect("listing should succeed");
    assert_eq!(admins_view.len(), 2);

    // Bob may update his assignment but not delete it; even the admin may
    // not delete a task they did not create.
    world
        .service
        .update(
            &bob,
            for_bob.id(),
            TaskPatch::new().with_status(TaskStatus::Completed),
        )
        .await
        .expect("assignee update should succeed");
    let bob_delete = world.service.delete(&bob, for_bob.id()).await;
    assert!(matches!(bob_delete, Err(TaskAccessError::Forbidden { .. })));
    let admin_delete = world.service.delete(&admin, for_bob.id()).await;
    assert!(matches!(admin_delete, Err(TaskAccessError::Forbidden { .. })));

    world
        .service
        .delete(&alice, for_bob.id())
        .await
        .expect("creator delete should succeed");
}
