//! Admin roster composition over a seeded directory.

use super::helpers::seed_profile;
use rstest::rstest;
use std::sync::Arc;
use taskboard::directory::adapters::memory::InMemoryDirectory;
use taskboard::directory::domain::Role;
use taskboard::directory::services::RosterService;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn roster_lists_every_profile_with_resolved_roles() {
    let directory = Arc::new(InMemoryDirectory::new());
    let admin_id = seed_profile(&directory, Some("Site Admin"), "admin@example.com")
        .expect("profile seeding should succeed");
    let member_id = seed_profile(&directory, None, "member@example.com")
        .expect("profile seeding should succeed");
    directory
        .assign_role(admin_id, Role::Admin)
        .expect("role seeding should succeed");

    let roster = RosterService::new(Arc::clone(&directory))
        .list_users()
        .await
        .expect("roster should succeed");

    assert_eq!(roster.len(), 2);
    let admin_entry = roster
        .iter()
        .find(|account| account.profile().id() == admin_id)
        .expect("admin entry should be present");
    assert!(admin_entry.is_admin());
    assert_eq!(admin_entry.profile().display_name(), "Site Admin");
    let member_entry = roster
        .iter()
        .find(|account| account.profile().id() == member_id)
        .expect("member entry should be present");
    assert_eq!(member_entry.roles(), &[Role::User]);
    assert_eq!(member_entry.profile().display_name(), "member@example.com");
}
