use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::application::use_cases::{
    AddDocumentToWorkspaceUseCase, CreateWorkspaceUseCase, DeleteWorkspaceUseCase,
    ListWorkspaceDocumentsUseCase, ListWorkspacesUseCase, RemoveDocumentFromWorkspaceUseCase,
    create_workspace::CreateWorkspaceRequest,
};
use crate::presentation::http::dto::{
    AddDocumentDto, CreateWorkspaceDto, DeleteWorkspaceDto, DeleteWorkspaceResponseDto,
    DocumentResponseDto, MessageResponseDto, RemoveDocumentDto, UserQueryDto,
    WorkspaceResponseDto,
};
use crate::presentation::http::errors::AppError;
use crate::presentation::http::handlers::required_user_id;

pub struct WorkspaceHandler {
    create_use_case: Arc<CreateWorkspaceUseCase>,
    list_use_case: Arc<ListWorkspacesUseCase>,
    delete_use_case: Arc<DeleteWorkspaceUseCase>,
    add_document_use_case: Arc<AddDocumentToWorkspaceUseCase>,
    remove_document_use_case: Arc<RemoveDocumentFromWorkspaceUseCase>,
    list_documents_use_case: Arc<ListWorkspaceDocumentsUseCase>,
}

impl WorkspaceHandler {
    pub fn new(
        create_use_case: Arc<CreateWorkspaceUseCase>,
        list_use_case: Arc<ListWorkspacesUseCase>,
        delete_use_case: Arc<DeleteWorkspaceUseCase>,
        add_document_use_case: Arc<AddDocumentToWorkspaceUseCase>,
        remove_document_use_case: Arc<RemoveDocumentFromWorkspaceUseCase>,
        list_documents_use_case: Arc<ListWorkspaceDocumentsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            list_use_case,
            delete_use_case,
            add_document_use_case,
            remove_document_use_case,
            list_documents_use_case,
        }
    }

    pub async fn create_workspace(
        State(handler): State<Arc<WorkspaceHandler>>,
        payload: Result<Json<CreateWorkspaceDto>, JsonRejection>,
    ) -> Result<impl IntoResponse, AppError> {
        let Json(payload) = payload?;
        let workspace = handler
            .create_use_case
            .execute(CreateWorkspaceRequest {
                title: payload.title,
                user_id: payload.user_id,
            })
            .await?;

        Ok((StatusCode::CREATED, Json(WorkspaceResponseDto::from(workspace))))
    }

    pub async fn list_workspaces(
        State(handler): State<Arc<WorkspaceHandler>>,
        query: Result<Query<UserQueryDto>, QueryRejection>,
    ) -> Result<impl IntoResponse, AppError> {
        let Query(query) = query?;
        let user_id = required_user_id(query.user_id.as_deref())?;

        let workspaces: Vec<WorkspaceResponseDto> = handler
            .list_use_case
            .execute(user_id)
            .await?
            .into_iter()
            .map(WorkspaceResponseDto::from)
            .collect();

        Ok(Json(workspaces))
    }

    pub async fn delete_workspace(
        State(handler): State<Arc<WorkspaceHandler>>,
        payload: Result<Json<DeleteWorkspaceDto>, JsonRejection>,
    ) -> Result<impl IntoResponse, AppError> {
        let Json(payload) = payload?;
        let response = handler.delete_use_case.execute(payload.id).await?;

        Ok(Json(DeleteWorkspaceResponseDto::from(response)))
    }

    pub async fn add_document(
        State(handler): State<Arc<WorkspaceHandler>>,
        payload: Result<Json<AddDocumentDto>, JsonRejection>,
    ) -> Result<impl IntoResponse, AppError> {
        let Json(payload) = payload?;
        handler
            .add_document_use_case
            .execute(payload.document_id, payload.workspace_id)
            .await?;

        Ok(Json(MessageResponseDto::new(format!(
            "Document {} added to workspace {}",
            payload.document_id, payload.workspace_id
        ))))
    }

    pub async fn remove_document(
        State(handler): State<Arc<WorkspaceHandler>>,
        payload: Result<Json<RemoveDocumentDto>, JsonRejection>,
    ) -> Result<impl IntoResponse, AppError> {
        let Json(payload) = payload?;
        handler
            .remove_document_use_case
            .execute(payload.document_id)
            .await?;

        Ok(Json(MessageResponseDto::new(format!(
            "Document {} removed from its workspace",
            payload.document_id
        ))))
    }

    pub async fn list_workspace_documents(
        State(handler): State<Arc<WorkspaceHandler>>,
        workspace_id: Result<Path<i64>, PathRejection>,
    ) -> Result<impl IntoResponse, AppError> {
        let Path(workspace_id) = workspace_id?;

        let documents: Vec<DocumentResponseDto> = handler
            .list_documents_use_case
            .execute(workspace_id)
            .await?
            .into_iter()
            .map(DocumentResponseDto::from)
            .collect();

        Ok(Json(documents))
    }
}
