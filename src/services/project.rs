use std::sync::Arc;

use bson::Document;

use crate::dates::{parse_display_date, today_display};
use crate::error::{AppError, AppResult};
use crate::models::{NewProject, Project, UpdateProject, UserRole};
use crate::query::{
    paginate, FieldKind, Page, SortComparator, SortValue, Sorting, SortingOrder,
};
use crate::services::{load_users, resolve_project, user_map, CandidateSet};
use crate::session::Session;
use crate::store::{
    DocumentStore, ProjectDocument, StoredDocument, UserDocument, PROJECTS_COLLECTION,
    USERS_COLLECTION,
};

/// Listing options for projects
#[derive(Debug, Clone)]
pub struct ProjectListOptions {
    pub sort_by: Option<String>,
    pub sorting_order: Option<SortingOrder>,
    pub page: i64,
    pub per_page: i64,
}

impl Default for ProjectListOptions {
    fn default() -> Self {
        Self {
            sort_by: None,
            sorting_order: None,
            page: 1,
            per_page: 10,
        }
    }
}

fn project_comparator() -> SortComparator<Project> {
    SortComparator::new(vec![
        (
            "project_owner",
            FieldKind::Reference(|p: &Project| p.project_owner.fullname.clone()),
        ),
        (
            "industry",
            FieldKind::MultiReference(|p: &Project| {
                p.industry.iter().map(|tag| tag.text.clone()).collect()
            }),
        ),
        (
            "creation_date",
            FieldKind::Date(|p: &Project| parse_display_date(&p.creation_date)),
        ),
        (
            "end_date",
            FieldKind::Date(|p: &Project| p.end_date.as_deref().and_then(parse_display_date)),
        ),
        (
            "project_name",
            FieldKind::Plain(|p: &Project| SortValue::text(p.project_name.as_str())),
        ),
        (
            "status",
            FieldKind::Plain(|p: &Project| SortValue::text(p.status.as_str())),
        ),
        (
            "id",
            FieldKind::Plain(|p: &Project| SortValue::text(p.id.as_str())),
        ),
    ])
}

/// Data access for project records
pub struct ProjectService {
    store: Arc<dyn DocumentStore>,
    session: Arc<dyn Session>,
    comparator: SortComparator<Project>,
}

impl ProjectService {
    pub fn new(store: Arc<dyn DocumentStore>, session: Arc<dyn Session>) -> Self {
        Self {
            store,
            session,
            comparator: project_comparator(),
        }
    }

    /// Candidate projects visible to the acting user, before sorting and
    /// pagination.
    ///
    /// Mentors only see projects whose industry display text equals their
    /// own; every other role sees the unrestricted set.
    pub async fn candidates(&self) -> AppResult<CandidateSet<Project>> {
        let Some(actor_id) = self.session.current_user_id() else {
            return Ok(CandidateSet::NoSession);
        };

        let Some(actor_stored) = self.store.get_by_id(USERS_COLLECTION, &actor_id).await? else {
            tracing::debug!(actor = %actor_id, "session names an unknown user");
            return Ok(CandidateSet::ActorMissing);
        };
        let actor = UserDocument::from_stored(&actor_stored)?;

        let users = user_map(&load_users(self.store.as_ref()).await?);
        let stored = self.store.list_all(PROJECTS_COLLECTION).await?;

        let mut projects = Vec::with_capacity(stored.len());
        for item in &stored {
            if let Some(project) = resolve_project(item, &users)? {
                projects.push(project);
            }
        }

        if actor.role == UserRole::Mentor {
            let wanted = actor.industry.map(|tag| tag.text);
            projects.retain(|project| Some(project.industry_text()) == wanted);
        }

        Ok(CandidateSet::Loaded(projects))
    }

    /// List projects visible to the acting user, sorted and paginated.
    ///
    /// A missing session or unknown actor yields an empty page echoing the
    /// requested window, never an error.
    pub async fn list(&self, options: &ProjectListOptions) -> AppResult<Page<Project>> {
        let mut projects = match self.candidates().await? {
            CandidateSet::Loaded(projects) => projects,
            CandidateSet::NoSession | CandidateSet::ActorMissing => {
                return Ok(Page::empty(options.page, options.per_page));
            }
        };

        let sorting = Sorting {
            sort_by: options.sort_by.clone(),
            sorting_order: options.sorting_order,
        };
        self.comparator.apply(&mut projects, &sorting);

        Ok(paginate(projects, options.page, options.per_page))
    }

    /// Create a project; the creation date is assigned here, not supplied.
    ///
    /// Returns the full denormalized record including the store-assigned
    /// id.
    pub async fn create(&self, input: NewProject) -> AppResult<Project> {
        let document = ProjectDocument {
            project_name: input.project_name,
            industry: input.industry,
            project_owner: input.project_owner,
            team: input.team,
            status: input.status,
            creation_date: today_display(),
            end_date: input.end_date,
        };

        let fields = document.into_fields()?;
        let id = self
            .store
            .create(PROJECTS_COLLECTION, fields.clone())
            .await?;
        tracing::debug!(project = %id, "created project");

        let users = user_map(&load_users(self.store.as_ref()).await?);
        let stored = StoredDocument { id, fields };
        resolve_project(&stored, &users)?.ok_or_else(|| AppError::NotFound("User".to_string()))
    }

    /// Merge-write the supplied fields; returns the input as confirmation.
    ///
    /// An id with no stored record is a silent no-op merge.
    pub async fn update(&self, changes: UpdateProject) -> AppResult<UpdateProject> {
        let mut fields = Document::new();
        if let Some(project_name) = &changes.project_name {
            fields.insert("project_name", project_name.clone());
        }
        if let Some(industry) = &changes.industry {
            fields.insert("industry", bson::to_bson(industry)?);
        }
        if let Some(project_owner) = &changes.project_owner {
            fields.insert("project_owner", project_owner.clone());
        }
        if let Some(team) = &changes.team {
            fields.insert("team", bson::to_bson(team)?);
        }
        if let Some(status) = &changes.status {
            fields.insert("status", bson::to_bson(status)?);
        }
        if let Some(end_date) = changes.end_date {
            fields.insert("end_date", end_date);
        }

        self.store
            .merge(PROJECTS_COLLECTION, &changes.id, fields)
            .await?;

        Ok(changes)
    }

    /// Delete by id; a nonexistent id is a no-op that still confirms.
    pub async fn remove(&self, project: Project) -> AppResult<Project> {
        self.store.delete(PROJECTS_COLLECTION, &project.id).await?;
        Ok(project)
    }
}
