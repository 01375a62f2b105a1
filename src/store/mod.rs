pub mod documents;
pub mod memory;
pub mod mongo;

pub use documents::{ProjectDocument, UserDocument};
pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;
use bson::{Bson, Document};

use crate::error::AppResult;

/// Collection holding project documents
pub const PROJECTS_COLLECTION: &str = "projects";

/// Collection holding user documents; the capitalization matches the
/// production database and must not be changed
pub const USERS_COLLECTION: &str = "Users";

/// A document as held by the store: assigned id plus its fields
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub fields: Document,
}

/// Generic document-collection interface.
///
/// Absence is reported as `None` (reads) or a no-op (writes); only I/O
/// failures surface as errors.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents of a collection, in retrieval order
    async fn list_all(&self, collection: &str) -> AppResult<Vec<StoredDocument>>;

    /// Single document by id; absent or malformed ids yield `None`
    async fn get_by_id(&self, collection: &str, id: &str) -> AppResult<Option<StoredDocument>>;

    /// Documents whose field equals `value`; an array-valued field matches
    /// when it contains `value`
    async fn query_eq(
        &self,
        collection: &str,
        field_path: &str,
        value: Bson,
    ) -> AppResult<Vec<StoredDocument>>;

    /// Insert a document and return the assigned id
    async fn create(&self, collection: &str, fields: Document) -> AppResult<String>;

    /// Overwrite only the supplied top-level fields; a missing id is a no-op
    async fn merge(&self, collection: &str, id: &str, fields: Document) -> AppResult<()>;

    /// Delete by id; a missing id is a no-op
    async fn delete(&self, collection: &str, id: &str) -> AppResult<()>;
}
