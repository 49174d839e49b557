use std::sync::Arc;
use tracing::info;

use crate::domain::repositories::{
    WorkspaceRepository, workspace_repository::WorkspaceRepositoryError,
};

#[derive(Debug)]
pub enum DeleteWorkspaceError {
    WorkspaceNotFound(i64),
    ValidationError(String),
    RepositoryError(String),
}

impl std::fmt::Display for DeleteWorkspaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteWorkspaceError::WorkspaceNotFound(id) => write!(f, "Workspace not found: {}", id),
            DeleteWorkspaceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            DeleteWorkspaceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for DeleteWorkspaceError {}

impl From<WorkspaceRepositoryError> for DeleteWorkspaceError {
    fn from(error: WorkspaceRepositoryError) -> Self {
        match error {
            WorkspaceRepositoryError::NotFound(id) => DeleteWorkspaceError::WorkspaceNotFound(id),
            _ => DeleteWorkspaceError::RepositoryError(error.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DeleteWorkspaceResponse {
    pub workspace_id: i64,
    pub documents_detached: usize,
}

pub struct DeleteWorkspaceUseCase {
    workspace_repository: Arc<dyn WorkspaceRepository>,
}

impl DeleteWorkspaceUseCase {
    pub fn new(workspace_repository: Arc<dyn WorkspaceRepository>) -> Self {
        Self {
            workspace_repository,
        }
    }

    /// Removes the workspace; attached documents survive with no workspace.
    pub async fn execute(
        &self,
        workspace_id: i64,
    ) -> Result<DeleteWorkspaceResponse, DeleteWorkspaceError> {
        if workspace_id <= 0 {
            return Err(DeleteWorkspaceError::ValidationError(
                "Invalid or missing workspace ID".to_string(),
            ));
        }

        let documents_detached = self.workspace_repository.delete(workspace_id).await?;
        info!(workspace_id, documents_detached, "Workspace deleted");

        Ok(DeleteWorkspaceResponse {
            workspace_id,
            documents_detached,
        })
    }
}
