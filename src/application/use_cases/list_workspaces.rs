use std::sync::Arc;

use crate::domain::entities::Workspace;
use crate::domain::repositories::{
    WorkspaceRepository, workspace_repository::WorkspaceRepositoryError,
};

#[derive(Debug)]
pub enum ListWorkspacesError {
    ValidationError(String),
    RepositoryError(String),
}

impl std::fmt::Display for ListWorkspacesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListWorkspacesError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ListWorkspacesError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ListWorkspacesError {}

impl From<WorkspaceRepositoryError> for ListWorkspacesError {
    fn from(error: WorkspaceRepositoryError) -> Self {
        ListWorkspacesError::RepositoryError(error.to_string())
    }
}

pub struct ListWorkspacesUseCase {
    workspace_repository: Arc<dyn WorkspaceRepository>,
}

impl ListWorkspacesUseCase {
    pub fn new(workspace_repository: Arc<dyn WorkspaceRepository>) -> Self {
        Self {
            workspace_repository,
        }
    }

    pub async fn execute(&self, user_id: i64) -> Result<Vec<Workspace>, ListWorkspacesError> {
        if user_id <= 0 {
            return Err(ListWorkspacesError::ValidationError(
                "user_id must be a positive integer".to_string(),
            ));
        }

        Ok(self.workspace_repository.find_by_user(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewWorkspace;
    use crate::test_support::InMemoryDatabase;

    #[tokio::test]
    async fn test_lists_only_the_users_workspaces() {
        let db = Arc::new(InMemoryDatabase::new());
        for (title, user_id) in [("Research", 3), ("Taxes", 3), ("Other", 4)] {
            WorkspaceRepository::create(
                db.as_ref(),
                NewWorkspace {
                    title: title.to_string(),
                    user_id,
                },
            )
            .await
            .unwrap();
        }
        let use_case = ListWorkspacesUseCase::new(db);

        let titles: Vec<String> = use_case
            .execute(3)
            .await
            .unwrap()
            .iter()
            .map(|w| w.title().to_string())
            .collect();

        assert_eq!(titles, vec!["Research", "Taxes"]);
        assert!(use_case.execute(5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_non_positive_user_id() {
        let use_case = ListWorkspacesUseCase::new(Arc::new(InMemoryDatabase::new()));
        assert!(matches!(
            use_case.execute(0).await,
            Err(ListWorkspacesError::ValidationError(_))
        ));
    }
}
