use bson::{doc, Bson};

use skillboard_data::models::UserRole;
use skillboard_data::store::{DocumentStore, MemoryStore, PROJECTS_COLLECTION, USERS_COLLECTION};

/// Factory for seeding test data directly into the store
pub struct Factory<'a> {
    store: &'a MemoryStore,
}

#[allow(dead_code)]
impl<'a> Factory<'a> {
    pub fn new(store: &'a MemoryStore) -> Self {
        Self { store }
    }

    async fn seed_user(
        &self,
        fullname: &str,
        role: UserRole,
        industry: Option<&str>,
        active: bool,
    ) -> String {
        let slug = fullname.to_lowercase().replace(' ', ".");
        let mut fields = doc! {
            "fullname": fullname,
            "email": format!("{}@example.com", slug),
            "username": slug.replace('.', "_"),
            "role": bson::to_bson(&role).unwrap(),
            "avatar": "",
            "notes": "",
            "active": active,
            "created_at": bson::DateTime::now(),
        };
        if let Some(text) = industry {
            fields.insert("industry", doc! { "text": text });
        }

        self.store.create(USERS_COLLECTION, fields).await.unwrap()
    }

    /// Seed an active user and return its id
    pub async fn create_user(&self, fullname: &str, role: UserRole) -> String {
        self.seed_user(fullname, role, None, true).await
    }

    /// Seed a mentor restricted to the given industry
    pub async fn create_mentor(&self, fullname: &str, industry: &str) -> String {
        self.seed_user(fullname, UserRole::Mentor, Some(industry), true)
            .await
    }

    /// Seed a deactivated user
    pub async fn create_inactive_user(&self, fullname: &str) -> String {
        self.seed_user(fullname, UserRole::User, None, false).await
    }

    async fn seed_project(
        &self,
        name: &str,
        owner_id: &str,
        industry: &str,
        creation_date: &str,
        team: &[&str],
        end_date: Option<bson::DateTime>,
    ) -> String {
        let team: Vec<String> = team.iter().map(|id| (*id).to_string()).collect();
        let fields = doc! {
            "project_name": name,
            "industry": [ { "text": industry } ],
            "project_owner": owner_id,
            "team": team,
            "status": "in_progress",
            "creation_date": creation_date,
            "end_date": end_date.map(Bson::DateTime).unwrap_or(Bson::Null),
        };

        self.store
            .create(PROJECTS_COLLECTION, fields)
            .await
            .unwrap()
    }

    /// Seed a project with an explicit creation date and no team
    pub async fn create_project(
        &self,
        name: &str,
        owner_id: &str,
        industry: &str,
        creation_date: &str,
    ) -> String {
        self.seed_project(name, owner_id, industry, creation_date, &[], None)
            .await
    }

    /// Seed a project with team members
    pub async fn create_project_with_team(
        &self,
        name: &str,
        owner_id: &str,
        industry: &str,
        creation_date: &str,
        team: &[&str],
    ) -> String {
        self.seed_project(name, owner_id, industry, creation_date, team, None)
            .await
    }

    /// Seed a finished project with a stored end instant
    pub async fn create_project_ended(
        &self,
        name: &str,
        owner_id: &str,
        industry: &str,
        creation_date: &str,
        end_date: bson::DateTime,
    ) -> String {
        self.seed_project(name, owner_id, industry, creation_date, &[], Some(end_date))
            .await
    }
}
