use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{doc, Bson, Document};
use futures::TryStreamExt;
use mongodb::{Client, Database};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::store::{DocumentStore, StoredDocument};

/// Document store backed by MongoDB
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Connect using the environment-driven configuration
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let client = Client::with_uri_str(&config.mongodb_url)
            .await
            .map_err(|e| AppError::Database(format!("MongoDB connection error: {}", e)))?;

        Ok(Self::new(client.database(&config.mongodb_database)))
    }

    fn collection(&self, name: &str) -> mongodb::Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

/// Split a raw document into its assigned id and the remaining fields
fn stored_from_raw(mut raw: Document) -> StoredDocument {
    let id = match raw.remove("_id") {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(other) => other.to_string(),
        None => String::new(),
    };

    StoredDocument { id, fields: raw }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn list_all(&self, collection: &str) -> AppResult<Vec<StoredDocument>> {
        let mut cursor = self.collection(collection).find(doc! {}).await?;

        let mut documents = Vec::new();
        while let Some(raw) = cursor.try_next().await? {
            documents.push(stored_from_raw(raw));
        }

        Ok(documents)
    }

    async fn get_by_id(&self, collection: &str, id: &str) -> AppResult<Option<StoredDocument>> {
        // A malformed id cannot name any document; absence, not an error
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let raw = self
            .collection(collection)
            .find_one(doc! { "_id": oid })
            .await?;

        Ok(raw.map(stored_from_raw))
    }

    async fn query_eq(
        &self,
        collection: &str,
        field_path: &str,
        value: Bson,
    ) -> AppResult<Vec<StoredDocument>> {
        let mut filter = Document::new();
        filter.insert(field_path, value);

        let mut cursor = self.collection(collection).find(filter).await?;

        let mut documents = Vec::new();
        while let Some(raw) = cursor.try_next().await? {
            documents.push(stored_from_raw(raw));
        }

        Ok(documents)
    }

    async fn create(&self, collection: &str, fields: Document) -> AppResult<String> {
        let result = self.collection(collection).insert_one(fields).await?;

        match result.inserted_id {
            Bson::ObjectId(oid) => Ok(oid.to_hex()),
            other => Ok(other.to_string()),
        }
    }

    async fn merge(&self, collection: &str, id: &str, fields: Document) -> AppResult<()> {
        // MongoDB rejects an empty $set document
        if fields.is_empty() {
            return Ok(());
        }

        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(());
        };

        // $set without upsert: merging into a missing document is a no-op
        self.collection(collection)
            .update_one(doc! { "_id": oid }, doc! { "$set": fields })
            .await?;

        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> AppResult<()> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(());
        };

        self.collection(collection)
            .delete_one(doc! { "_id": oid })
            .await?;

        Ok(())
    }
}
