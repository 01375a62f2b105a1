pub mod project;
pub mod user;

pub use project::{ProjectListOptions, ProjectService};
pub use user::{UserListFilters, UserService};

use std::collections::HashMap;

use crate::dates::format_display_date;
use crate::error::AppResult;
use crate::models::{Project, User};
use crate::store::{DocumentStore, ProjectDocument, StoredDocument, UserDocument, USERS_COLLECTION};

/// Candidate records for a listing, with the reason when there are none.
///
/// Callers receive a uniform empty page either way; the variants keep the
/// cause observable for tests and diagnostics.
#[derive(Debug)]
pub enum CandidateSet<T> {
    Loaded(Vec<T>),
    /// No actor in the session
    NoSession,
    /// The session named an actor with no stored record
    ActorMissing,
}

/// All user records in retrieval order, with empty derived project lists
pub(crate) async fn load_users(store: &dyn DocumentStore) -> AppResult<Vec<User>> {
    let stored = store.list_all(USERS_COLLECTION).await?;

    let mut users = Vec::with_capacity(stored.len());
    for item in stored {
        let document = UserDocument::from_stored(&item)?;
        users.push(document.into_user(item.id));
    }

    Ok(users)
}

/// Resolve a stored project against the given user set.
///
/// A project whose owner record is missing cannot satisfy the
/// denormalization contract and is dropped; missing team members are
/// simply omitted from the team.
pub(crate) fn resolve_project(
    stored: &StoredDocument,
    users: &HashMap<String, User>,
) -> AppResult<Option<Project>> {
    let document = ProjectDocument::from_stored(stored)?;

    let Some(owner) = users.get(&document.project_owner) else {
        tracing::warn!(
            project = %stored.id,
            owner = %document.project_owner,
            "dropping project with unresolved owner"
        );
        return Ok(None);
    };

    let team = document
        .team
        .iter()
        .filter_map(|member_id| users.get(member_id).cloned())
        .collect();

    Ok(Some(Project {
        id: stored.id.clone(),
        project_name: document.project_name,
        industry: document.industry,
        project_owner: owner.clone(),
        team,
        status: document.status,
        creation_date: document.creation_date,
        end_date: document
            .end_date
            .map(|instant| format_display_date(instant.to_time_0_3().date())),
    }))
}

pub(crate) fn user_map(users: &[User]) -> HashMap<String, User> {
    users
        .iter()
        .map(|user| (user.id.clone(), user.clone()))
        .collect()
}
