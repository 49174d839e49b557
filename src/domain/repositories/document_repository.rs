use async_trait::async_trait;

use crate::domain::entities::{Document, NewDocument};

#[derive(Debug)]
pub enum DocumentRepositoryError {
    NotFound(i64),
    WorkspaceNotFound(i64),
    DatabaseError(String),
    ValidationError(String),
}

impl std::fmt::Display for DocumentRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentRepositoryError::NotFound(id) => write!(f, "Document not found: {}", id),
            DocumentRepositoryError::WorkspaceNotFound(id) => {
                write!(f, "Workspace not found: {}", id)
            }
            DocumentRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            DocumentRepositoryError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for DocumentRepositoryError {}

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Persists a new document, assigning its id and upload time.
    async fn create(&self, document: NewDocument) -> Result<Document, DocumentRepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Document>, DocumentRepositoryError>;
    /// All documents of a user in insertion order.
    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Document>, DocumentRepositoryError>;
    async fn find_by_workspace(
        &self,
        workspace_id: i64,
    ) -> Result<Vec<Document>, DocumentRepositoryError>;
    /// Points a document at a workspace, or detaches it with `None`.
    /// Fails with `NotFound` when the document does not exist.
    async fn set_workspace(
        &self,
        document_id: i64,
        workspace_id: Option<i64>,
    ) -> Result<(), DocumentRepositoryError>;
}
