use std::sync::Arc;

use skillboard_data::services::{ProjectService, UserService};
use skillboard_data::session::ProfileStore;
use skillboard_data::store::MemoryStore;

/// Test application wrapper: services wired to in-memory collaborators
#[allow(dead_code)]
pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub session: Arc<ProfileStore>,
    pub projects: ProjectService,
    pub users: UserService,
}

impl TestApp {
    /// Create a new test application with a signed-out session
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();

        let store = Arc::new(MemoryStore::new());
        let session = Arc::new(ProfileStore::anonymous());
        let projects = ProjectService::new(store.clone(), session.clone());
        let users = UserService::new(store.clone());

        Self {
            store,
            session,
            projects,
            users,
        }
    }
}
