//! Shared test helpers for in-memory integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;
use taskboard::directory::adapters::memory::InMemoryDirectory;
use taskboard::directory::domain::Profile;
use taskboard::identity::UserId;
use taskboard::task::adapters::memory::InMemoryTaskRepository;
use taskboard::task::services::TaskAccessService;
use chrono::Utc;

/// Service wired to fresh in-memory adapters, plus handles to seed them.
pub struct World {
    /// Task access service under test.
    pub service: TaskAccessService<InMemoryTaskRepository, InMemoryDirectory, DefaultClock>,
    /// Directory backing the service, exposed for seeding.
    pub directory: Arc<InMemoryDirectory>,
}

/// Provides a fresh world for each test.
#[fixture]
pub fn world() -> World {
    let directory = Arc::new(InMemoryDirectory::new());
    let service = TaskAccessService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::clone(&directory),
        Arc::new(DefaultClock),
    );
    World { service, directory }
}

/// Seeds a profile and returns its identifier.
///
/// # Errors
///
/// Returns an error when the directory rejects the profile.
pub fn seed_profile(
    directory: &InMemoryDirectory,
    full_name: Option<&str>,
    email: &str,
) -> Result<UserId, eyre::Report> {
    let id = UserId::new();
    directory.insert_profile(Profile::new(
        id,
        full_name.map(str::to_owned),
        email,
        Utc::now(),
    ))?;
    Ok(id)
}
