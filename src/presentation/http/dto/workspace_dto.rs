use serde::{Deserialize, Serialize};

use crate::application::use_cases::delete_workspace::DeleteWorkspaceResponse;
use crate::domain::entities::Workspace;

#[derive(Debug, Serialize)]
pub struct WorkspaceResponseDto {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub created_at: String,
}

impl From<Workspace> for WorkspaceResponseDto {
    fn from(workspace: Workspace) -> Self {
        Self {
            id: workspace.id(),
            user_id: workspace.user_id(),
            title: workspace.title().to_string(),
            created_at: workspace.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateWorkspaceDto {
    pub title: String,
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct DeleteWorkspaceDto {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct AddDocumentDto {
    pub document_id: i64,
    pub workspace_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct RemoveDocumentDto {
    pub document_id: i64,
}

#[derive(Debug, Serialize)]
pub struct DeleteWorkspaceResponseDto {
    pub message: String,
    pub documents_detached: usize,
}

impl From<DeleteWorkspaceResponse> for DeleteWorkspaceResponseDto {
    fn from(response: DeleteWorkspaceResponse) -> Self {
        Self {
            message: format!("Workspace {} deleted", response.workspace_id),
            documents_detached: response.documents_detached,
        }
    }
}
