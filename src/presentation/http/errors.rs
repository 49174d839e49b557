use axum::{
    Json,
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::application::use_cases::{
    create_workspace::CreateWorkspaceError, delete_workspace::DeleteWorkspaceError,
    get_document::GetDocumentError, ingest_document::IngestDocumentError,
    list_documents::ListDocumentsError, list_workspaces::ListWorkspacesError,
    workspace_documents::WorkspaceDocumentsError,
};

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    PayloadTooLarge(String),
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::PayloadTooLarge(msg)
            | AppError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Internal(msg) => error!(status = status.as_u16(), "{}", msg),
            other => warn!(status = status.as_u16(), "{}", other),
        }

        let message = match self {
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::PayloadTooLarge(msg)
            | AppError::Internal(msg) => msg,
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(error: MultipartError) -> Self {
        if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(error.body_text())
        } else {
            AppError::BadRequest(error.body_text())
        }
    }
}

impl From<IngestDocumentError> for AppError {
    fn from(error: IngestDocumentError) -> Self {
        match error {
            IngestDocumentError::ValidationError(msg) => AppError::BadRequest(msg),
            IngestDocumentError::PayloadTooLarge { .. } => {
                AppError::PayloadTooLarge(error.to_string())
            }
            IngestDocumentError::StageFailed { .. } => AppError::Internal(error.to_string()),
        }
    }
}

impl From<ListDocumentsError> for AppError {
    fn from(error: ListDocumentsError) -> Self {
        match error {
            ListDocumentsError::ValidationError(msg) => AppError::BadRequest(msg),
            ListDocumentsError::RepositoryError(msg) => AppError::Internal(msg),
        }
    }
}

impl From<GetDocumentError> for AppError {
    fn from(error: GetDocumentError) -> Self {
        match error {
            GetDocumentError::DocumentNotFound(_) => AppError::NotFound(error.to_string()),
            _ => AppError::Internal(error.to_string()),
        }
    }
}

impl From<CreateWorkspaceError> for AppError {
    fn from(error: CreateWorkspaceError) -> Self {
        match error {
            CreateWorkspaceError::ValidationError(msg) => AppError::BadRequest(msg),
            CreateWorkspaceError::RepositoryError(msg) => AppError::Internal(msg),
        }
    }
}

impl From<ListWorkspacesError> for AppError {
    fn from(error: ListWorkspacesError) -> Self {
        match error {
            ListWorkspacesError::ValidationError(msg) => AppError::BadRequest(msg),
            ListWorkspacesError::RepositoryError(msg) => AppError::Internal(msg),
        }
    }
}

impl From<DeleteWorkspaceError> for AppError {
    fn from(error: DeleteWorkspaceError) -> Self {
        match error {
            DeleteWorkspaceError::WorkspaceNotFound(_) => AppError::NotFound(error.to_string()),
            DeleteWorkspaceError::ValidationError(msg) => AppError::BadRequest(msg),
            DeleteWorkspaceError::RepositoryError(msg) => AppError::Internal(msg),
        }
    }
}

impl From<WorkspaceDocumentsError> for AppError {
    fn from(error: WorkspaceDocumentsError) -> Self {
        match error {
            WorkspaceDocumentsError::DocumentNotFound(_)
            | WorkspaceDocumentsError::WorkspaceNotFound(_) => {
                AppError::NotFound(error.to_string())
            }
            WorkspaceDocumentsError::ValidationError(msg) => AppError::BadRequest(msg),
            WorkspaceDocumentsError::RepositoryError(msg) => AppError::Internal(msg),
        }
    }
}
