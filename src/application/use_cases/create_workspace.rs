use std::sync::Arc;
use tracing::info;

use crate::domain::entities::{NewWorkspace, Workspace};
use crate::domain::repositories::{
    WorkspaceRepository, workspace_repository::WorkspaceRepositoryError,
};

#[derive(Debug)]
pub enum CreateWorkspaceError {
    ValidationError(String),
    RepositoryError(String),
}

impl std::fmt::Display for CreateWorkspaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateWorkspaceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            CreateWorkspaceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for CreateWorkspaceError {}

impl From<WorkspaceRepositoryError> for CreateWorkspaceError {
    fn from(error: WorkspaceRepositoryError) -> Self {
        match error {
            WorkspaceRepositoryError::ValidationError(msg) => {
                CreateWorkspaceError::ValidationError(msg)
            }
            _ => CreateWorkspaceError::RepositoryError(error.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateWorkspaceRequest {
    pub title: String,
    pub user_id: i64,
}

pub struct CreateWorkspaceUseCase {
    workspace_repository: Arc<dyn WorkspaceRepository>,
}

impl CreateWorkspaceUseCase {
    pub fn new(workspace_repository: Arc<dyn WorkspaceRepository>) -> Self {
        Self {
            workspace_repository,
        }
    }

    pub async fn execute(
        &self,
        request: CreateWorkspaceRequest,
    ) -> Result<Workspace, CreateWorkspaceError> {
        let new_workspace = NewWorkspace {
            title: request.title.trim().to_string(),
            user_id: request.user_id,
        };
        new_workspace
            .validate()
            .map_err(CreateWorkspaceError::ValidationError)?;

        let workspace = self.workspace_repository.create(new_workspace).await?;
        info!(workspace_id = workspace.id(), user_id = workspace.user_id(), "Workspace created");

        Ok(workspace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InMemoryDatabase;

    #[tokio::test]
    async fn test_create_trims_title() {
        let use_case = CreateWorkspaceUseCase::new(Arc::new(InMemoryDatabase::new()));

        let ws = use_case
            .execute(CreateWorkspaceRequest {
                title: "  Research ".to_string(),
                user_id: 3,
            })
            .await
            .unwrap();

        assert!(ws.id() > 0);
        assert_eq!(ws.title(), "Research");
        assert_eq!(ws.user_id(), 3);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let use_case = CreateWorkspaceUseCase::new(Arc::new(InMemoryDatabase::new()));

        for (title, user_id) in [("", 3), ("Research", 0)] {
            let result = use_case
                .execute(CreateWorkspaceRequest {
                    title: title.to_string(),
                    user_id,
                })
                .await;
            assert!(matches!(result, Err(CreateWorkspaceError::ValidationError(_))));
        }
    }
}
