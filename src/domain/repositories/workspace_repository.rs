use async_trait::async_trait;

use crate::domain::entities::{NewWorkspace, Workspace};

#[derive(Debug)]
pub enum WorkspaceRepositoryError {
    NotFound(i64),
    DatabaseError(String),
    ValidationError(String),
}

impl std::fmt::Display for WorkspaceRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkspaceRepositoryError::NotFound(id) => write!(f, "Workspace not found: {}", id),
            WorkspaceRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            WorkspaceRepositoryError::ValidationError(msg) => {
                write!(f, "Validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for WorkspaceRepositoryError {}

#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    async fn create(&self, workspace: NewWorkspace) -> Result<Workspace, WorkspaceRepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Workspace>, WorkspaceRepositoryError>;
    async fn find_by_user(&self, user_id: i64)
    -> Result<Vec<Workspace>, WorkspaceRepositoryError>;
    /// Detaches every document from the workspace and removes it as one unit.
    /// Returns how many documents were detached.
    async fn delete(&self, id: i64) -> Result<usize, WorkspaceRepositoryError>;
}
