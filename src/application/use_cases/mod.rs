pub mod create_workspace;
pub mod delete_workspace;
pub mod get_document;
pub mod ingest_document;
pub mod list_documents;
pub mod list_workspaces;
pub mod workspace_documents;

pub use create_workspace::CreateWorkspaceUseCase;
pub use delete_workspace::DeleteWorkspaceUseCase;
pub use get_document::GetDocumentUseCase;
pub use ingest_document::IngestDocumentUseCase;
pub use list_documents::ListDocumentsUseCase;
pub use list_workspaces::ListWorkspacesUseCase;
pub use workspace_documents::{
    AddDocumentToWorkspaceUseCase, ListWorkspaceDocumentsUseCase,
    RemoveDocumentFromWorkspaceUseCase,
};
