use bson::Document;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::{IndustryTag, ProjectStatus, User, UserRole};
use crate::store::StoredDocument;

/// Project document stored in the projects collection.
///
/// Owner and team are held as user ids; resolution to full records
/// happens at read time and is never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub project_name: String,
    #[serde(default)]
    pub industry: Vec<IndustryTag>,
    pub project_owner: String,
    #[serde(default)]
    pub team: Vec<String>,
    pub status: ProjectStatus,
    /// Display-formatted, assigned by the service on create
    pub creation_date: String,
    #[serde(default)]
    pub end_date: Option<bson::DateTime>,
}

/// User document stored in the users collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    pub fullname: String,
    pub email: String,
    pub username: String,
    pub role: UserRole,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub notes: String,
    pub active: bool,
    pub created_at: bson::DateTime,
    #[serde(default)]
    pub industry: Option<IndustryTag>,
}

impl ProjectDocument {
    pub fn from_stored(stored: &StoredDocument) -> AppResult<Self> {
        Ok(bson::from_document(stored.fields.clone())?)
    }

    pub fn into_fields(self) -> AppResult<Document> {
        Ok(bson::to_document(&self)?)
    }
}

impl UserDocument {
    pub fn from_stored(stored: &StoredDocument) -> AppResult<Self> {
        Ok(bson::from_document(stored.fields.clone())?)
    }

    pub fn into_fields(self) -> AppResult<Document> {
        Ok(bson::to_document(&self)?)
    }

    /// Domain user for this document, with an empty derived project list
    pub fn into_user(self, id: String) -> User {
        User {
            id,
            fullname: self.fullname,
            email: self.email,
            username: self.username,
            role: self.role,
            avatar: self.avatar,
            notes: self.notes,
            active: self.active,
            created_at: self.created_at.to_time_0_3(),
            industry: self.industry,
            projects: Vec::new(),
        }
    }
}
