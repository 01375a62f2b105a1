use std::sync::Arc;

use bson::Document;

use crate::error::AppResult;
use crate::models::{NewUser, UpdateUser, User};
use crate::query::{FieldKind, Page, Pagination, SortComparator, SortValue, Sorting, SortingOrder};
use crate::services::{load_users, resolve_project, user_map};
use crate::store::{DocumentStore, UserDocument, PROJECTS_COLLECTION, USERS_COLLECTION};

/// Listing filters for users; every part is optional.
///
/// `is_active` and `search` are accepted for interface compatibility but
/// not applied; see DESIGN.md.
#[derive(Debug, Clone, Default)]
pub struct UserListFilters {
    pub is_active: Option<bool>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sorting_order: Option<SortingOrder>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

fn user_comparator() -> SortComparator<User> {
    SortComparator::new(vec![
        (
            "projects",
            FieldKind::MultiReference(|u: &User| {
                u.projects
                    .iter()
                    .map(|project| project.project_name.clone())
                    .collect()
            }),
        ),
        (
            "fullname",
            FieldKind::Plain(|u: &User| SortValue::text(u.fullname.as_str())),
        ),
        (
            "email",
            FieldKind::Plain(|u: &User| SortValue::text(u.email.as_str())),
        ),
        (
            "username",
            FieldKind::Plain(|u: &User| SortValue::text(u.username.as_str())),
        ),
        (
            "role",
            FieldKind::Plain(|u: &User| SortValue::text(u.role.as_str())),
        ),
        (
            "notes",
            FieldKind::Plain(|u: &User| SortValue::text(u.notes.as_str())),
        ),
        (
            "active",
            FieldKind::Plain(|u: &User| SortValue::Bool(u.active)),
        ),
        (
            "created_at",
            FieldKind::Plain(|u: &User| SortValue::Number(u.created_at.unix_timestamp() as f64)),
        ),
        (
            "id",
            FieldKind::Plain(|u: &User| SortValue::text(u.id.as_str())),
        ),
    ])
}

/// Data access for user records
pub struct UserService {
    store: Arc<dyn DocumentStore>,
    comparator: SortComparator<User>,
}

impl UserService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            comparator: user_comparator(),
        }
    }

    /// List every user with derived projects attached.
    ///
    /// The result is always a single page spanning the full set: the
    /// reported window is `page: 1, per_page: total` regardless of what
    /// was requested. Callers needing client-side paging slice the
    /// returned set themselves.
    pub async fn list(&self, filters: &UserListFilters) -> AppResult<Page<User>> {
        let mut data = load_users(self.store.as_ref()).await?;
        let users = user_map(&data);

        let stored_projects = self.store.list_all(PROJECTS_COLLECTION).await?;
        let mut projects = Vec::with_capacity(stored_projects.len());
        for item in &stored_projects {
            if let Some(project) = resolve_project(item, &users)? {
                projects.push(project);
            }
        }

        for user in &mut data {
            user.projects = projects
                .iter()
                .filter(|project| project.team.iter().any(|member| member.id == user.id))
                .cloned()
                .collect();
        }

        let sorting = Sorting {
            sort_by: filters.sort_by.clone(),
            sorting_order: filters.sorting_order,
        };
        self.comparator.apply(&mut data, &sorting);

        let total = data.len();
        Ok(Page {
            data,
            pagination: Pagination {
                page: 1,
                per_page: total as i64,
                total: total as u64,
            },
        })
    }

    /// Create a user; the creation timestamp is assigned here.
    pub async fn create(&self, input: NewUser) -> AppResult<User> {
        let document = UserDocument {
            fullname: input.fullname,
            email: input.email,
            username: input.username,
            role: input.role,
            avatar: input.avatar,
            notes: input.notes,
            active: input.active,
            created_at: bson::DateTime::now(),
            industry: input.industry,
        };

        let fields = document.clone().into_fields()?;
        let id = self.store.create(USERS_COLLECTION, fields).await?;
        tracing::debug!(user = %id, "created user");

        Ok(document.into_user(id))
    }

    /// Merge-write the supplied fields; returns the input as confirmation.
    pub async fn update(&self, changes: UpdateUser) -> AppResult<UpdateUser> {
        let mut fields = Document::new();
        if let Some(fullname) = &changes.fullname {
            fields.insert("fullname", fullname.clone());
        }
        if let Some(email) = &changes.email {
            fields.insert("email", email.clone());
        }
        if let Some(username) = &changes.username {
            fields.insert("username", username.clone());
        }
        if let Some(role) = &changes.role {
            fields.insert("role", bson::to_bson(role)?);
        }
        if let Some(avatar) = &changes.avatar {
            fields.insert("avatar", avatar.clone());
        }
        if let Some(notes) = &changes.notes {
            fields.insert("notes", notes.clone());
        }
        if let Some(active) = changes.active {
            fields.insert("active", active);
        }
        if let Some(industry) = &changes.industry {
            fields.insert("industry", bson::to_bson(industry)?);
        }

        self.store
            .merge(USERS_COLLECTION, &changes.id, fields)
            .await?;

        Ok(changes)
    }

    /// Delete by id; a nonexistent id is a no-op that still confirms.
    pub async fn remove(&self, user: User) -> AppResult<User> {
        self.store.delete(USERS_COLLECTION, &user.id).await?;
        Ok(user)
    }
}
