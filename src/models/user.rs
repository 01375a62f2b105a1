use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::models::{IndustryTag, Project};

/// Role stored on a user record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    Owner,
    Mentor,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Owner => "owner",
            UserRole::Mentor => "mentor",
        }
    }
}

/// User as returned to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub fullname: String,
    pub email: String,
    pub username: String,
    pub role: UserRole,
    pub avatar: String,
    pub notes: String,
    pub active: bool,
    pub created_at: OffsetDateTime,
    /// Industry this user mentors in, when mentor-capable
    pub industry: Option<IndustryTag>,
    /// Projects this user is on a team of; derived on read, never stored
    pub projects: Vec<Project>,
}

/// User creation DTO; id and creation timestamp are assigned on create
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub fullname: String,
    pub email: String,
    pub username: String,
    pub role: UserRole,
    pub avatar: String,
    pub notes: String,
    pub active: bool,
    pub industry: Option<IndustryTag>,
}

/// User merge-update DTO; only supplied fields are written
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    pub id: String,
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub role: Option<UserRole>,
    pub avatar: Option<String>,
    pub notes: Option<String>,
    pub active: Option<bool>,
    pub industry: Option<IndustryTag>,
}
