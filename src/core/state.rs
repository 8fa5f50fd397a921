// Application state (AppState)

use crate::core::config::Config;
use crate::session::snapshot::SessionSnapshot;
use crate::session::store::SessionStore;
use crate::stores::course_catalog::CourseCatalog;
use crate::stores::directory::UserDirectory;
use crate::stores::package_catalog::PackageCatalog;
use crate::stores::progress_store::ProgressStore;
use crate::stores::registration_ledger::RegistrationLedger;
use crate::tasks::upgrade::UpgradeScheduler;
use std::sync::Arc;

/// Shared application state
///
/// Contains all shared components that are accessed by request handlers.
/// All fields are wrapped in Arc for efficient cloning across threads.
#[derive(Clone)]
pub struct AppState {
    /// User directory for login and role lookups
    pub directory: Arc<UserDirectory>,

    /// Package catalog, static after seeding
    pub packages: Arc<PackageCatalog>,

    /// Registration ledger with the payment state machine
    pub registrations: Arc<RegistrationLedger>,

    /// Course catalog, static after seeding
    pub courses: Arc<CourseCatalog>,

    /// Per-user course progress
    pub progress: Arc<ProgressStore>,

    /// The active login session
    pub session: Arc<SessionStore>,

    /// Durable session snapshot
    pub snapshot: Arc<SessionSnapshot>,

    /// Pending delayed agent upgrades
    pub upgrades: Arc<UpgradeScheduler>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        let directory = Arc::new(UserDirectory::new());
        let session = Arc::new(SessionStore::new());
        let snapshot = Arc::new(SessionSnapshot::new(config.auth.session_file.clone()));

        let upgrades = Arc::new(UpgradeScheduler::new(
            Arc::clone(&directory),
            Arc::clone(&session),
            Arc::clone(&snapshot),
        ));

        Self {
            directory,
            packages: Arc::new(PackageCatalog::new()),
            registrations: Arc::new(RegistrationLedger::new()),
            courses: Arc::new(CourseCatalog::new()),
            progress: Arc::new(ProgressStore::new()),
            session,
            snapshot,
            upgrades,
            config,
        }
    }
}
