use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::Document;
use crate::domain::repositories::{
    DocumentRepository, WorkspaceRepository, document_repository::DocumentRepositoryError,
    workspace_repository::WorkspaceRepositoryError,
};

#[derive(Debug)]
pub enum WorkspaceDocumentsError {
    DocumentNotFound(i64),
    WorkspaceNotFound(i64),
    ValidationError(String),
    RepositoryError(String),
}

impl std::fmt::Display for WorkspaceDocumentsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkspaceDocumentsError::DocumentNotFound(id) => {
                write!(f, "Document not found: {}", id)
            }
            WorkspaceDocumentsError::WorkspaceNotFound(id) => {
                write!(f, "Workspace not found: {}", id)
            }
            WorkspaceDocumentsError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            WorkspaceDocumentsError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for WorkspaceDocumentsError {}

impl From<DocumentRepositoryError> for WorkspaceDocumentsError {
    fn from(error: DocumentRepositoryError) -> Self {
        match error {
            DocumentRepositoryError::NotFound(id) => WorkspaceDocumentsError::DocumentNotFound(id),
            DocumentRepositoryError::WorkspaceNotFound(id) => {
                WorkspaceDocumentsError::WorkspaceNotFound(id)
            }
            _ => WorkspaceDocumentsError::RepositoryError(error.to_string()),
        }
    }
}

impl From<WorkspaceRepositoryError> for WorkspaceDocumentsError {
    fn from(error: WorkspaceRepositoryError) -> Self {
        match error {
            WorkspaceRepositoryError::NotFound(id) => {
                WorkspaceDocumentsError::WorkspaceNotFound(id)
            }
            _ => WorkspaceDocumentsError::RepositoryError(error.to_string()),
        }
    }
}

fn require_id(field: &str, id: i64) -> Result<(), WorkspaceDocumentsError> {
    if id <= 0 {
        return Err(WorkspaceDocumentsError::ValidationError(format!(
            "{} must be a positive integer",
            field
        )));
    }
    Ok(())
}

pub struct AddDocumentToWorkspaceUseCase {
    document_repository: Arc<dyn DocumentRepository>,
    workspace_repository: Arc<dyn WorkspaceRepository>,
}

impl AddDocumentToWorkspaceUseCase {
    pub fn new(
        document_repository: Arc<dyn DocumentRepository>,
        workspace_repository: Arc<dyn WorkspaceRepository>,
    ) -> Self {
        Self {
            document_repository,
            workspace_repository,
        }
    }

    /// Links the document to the workspace. The workspace must exist first;
    /// otherwise the document is left untouched.
    pub async fn execute(
        &self,
        document_id: i64,
        workspace_id: i64,
    ) -> Result<(), WorkspaceDocumentsError> {
        require_id("document_id", document_id)?;
        require_id("workspace_id", workspace_id)?;

        if self.workspace_repository.find_by_id(workspace_id).await?.is_none() {
            return Err(WorkspaceDocumentsError::WorkspaceNotFound(workspace_id));
        }

        self.document_repository
            .set_workspace(document_id, Some(workspace_id))
            .await?;
        debug!(document_id, workspace_id, "Document added to workspace");

        Ok(())
    }
}

pub struct RemoveDocumentFromWorkspaceUseCase {
    document_repository: Arc<dyn DocumentRepository>,
}

impl RemoveDocumentFromWorkspaceUseCase {
    pub fn new(document_repository: Arc<dyn DocumentRepository>) -> Self {
        Self {
            document_repository,
        }
    }

    /// Detaches the document. Detaching an unattached document is a no-op.
    pub async fn execute(&self, document_id: i64) -> Result<(), WorkspaceDocumentsError> {
        require_id("document_id", document_id)?;

        self.document_repository
            .set_workspace(document_id, None)
            .await?;
        debug!(document_id, "Document removed from workspace");

        Ok(())
    }
}

pub struct ListWorkspaceDocumentsUseCase {
    document_repository: Arc<dyn DocumentRepository>,
    workspace_repository: Arc<dyn WorkspaceRepository>,
}

impl ListWorkspaceDocumentsUseCase {
    pub fn new(
        document_repository: Arc<dyn DocumentRepository>,
        workspace_repository: Arc<dyn WorkspaceRepository>,
    ) -> Self {
        Self {
            document_repository,
            workspace_repository,
        }
    }

    pub async fn execute(
        &self,
        workspace_id: i64,
    ) -> Result<Vec<Document>, WorkspaceDocumentsError> {
        require_id("workspace_id", workspace_id)?;

        if self.workspace_repository.find_by_id(workspace_id).await?.is_none() {
            return Err(WorkspaceDocumentsError::WorkspaceNotFound(workspace_id));
        }

        Ok(self.document_repository.find_by_workspace(workspace_id).await?)
    }
}
