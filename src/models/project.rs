use serde::{Deserialize, Serialize};

use crate::models::User;

/// Industry tag carried by projects and by mentor-capable users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryTag {
    pub text: String,
}

impl IndustryTag {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    InProgress,
    Completed,
    Archived,
    Important,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Archived => "archived",
            ProjectStatus::Important => "important",
        }
    }
}

/// Project as returned to callers, with owner and team fully resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub project_name: String,
    pub industry: Vec<IndustryTag>,
    pub project_owner: User,
    pub team: Vec<User>,
    pub status: ProjectStatus,
    pub creation_date: String,
    /// Display-formatted end date, `None` when no end date is stored
    pub end_date: Option<String>,
}

impl Project {
    /// Comma-joined industry display text, in stored order
    pub fn industry_text(&self) -> String {
        self.industry
            .iter()
            .map(|tag| tag.text.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Project creation DTO; id and creation date are assigned on create
#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    pub project_name: String,
    pub industry: Vec<IndustryTag>,
    /// Owner's user id; resolved to the full record on read
    pub project_owner: String,
    /// Team member user ids; resolved to full records on read
    pub team: Vec<String>,
    pub status: ProjectStatus,
    pub end_date: Option<bson::DateTime>,
}

/// Project merge-update DTO; only supplied fields are written
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProject {
    pub id: String,
    pub project_name: Option<String>,
    pub industry: Option<Vec<IndustryTag>>,
    pub project_owner: Option<String>,
    pub team: Option<Vec<String>>,
    pub status: Option<ProjectStatus>,
    pub end_date: Option<bson::DateTime>,
}
