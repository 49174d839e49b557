use axum::{
    Json,
    extract::{
        Multipart, Path, Query, State,
        multipart::MultipartRejection,
        rejection::{PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::debug;

use crate::application::use_cases::{
    GetDocumentUseCase, IngestDocumentUseCase, ListDocumentsUseCase,
    ingest_document::{IngestDocumentRequest, UploadedFile},
};
use crate::presentation::http::dto::{DocumentResponseDto, UploadResponseDto, UserQueryDto};
use crate::presentation::http::errors::AppError;
use crate::presentation::http::handlers::required_user_id;

pub struct DocumentHandler {
    ingest_use_case: Arc<IngestDocumentUseCase>,
    list_documents_use_case: Arc<ListDocumentsUseCase>,
    get_document_use_case: Arc<GetDocumentUseCase>,
}

impl DocumentHandler {
    pub fn new(
        ingest_use_case: Arc<IngestDocumentUseCase>,
        list_documents_use_case: Arc<ListDocumentsUseCase>,
        get_document_use_case: Arc<GetDocumentUseCase>,
    ) -> Self {
        Self {
            ingest_use_case,
            list_documents_use_case,
            get_document_use_case,
        }
    }

    pub async fn upload_document(
        State(handler): State<Arc<DocumentHandler>>,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<impl IntoResponse, AppError> {
        let mut multipart = multipart?;
        let mut request = IngestDocumentRequest::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "pdf" => {
                    let file_name = field.file_name().unwrap_or("upload.pdf").to_string();
                    let data = field.bytes().await?.to_vec();
                    request.file = Some(UploadedFile { file_name, data });
                }
                "title" => request.title = Some(field.text().await?),
                "user_id" => request.user_id = Some(field.text().await?),
                "workspace_id" => request.workspace_id = Some(field.text().await?),
                other => debug!(field = other, "Ignoring unknown multipart field"),
            }
        }

        let response = handler.ingest_use_case.execute(request).await?;
        Ok((StatusCode::CREATED, Json(UploadResponseDto::from(response))))
    }

    pub async fn list_documents(
        State(handler): State<Arc<DocumentHandler>>,
        query: Result<Query<UserQueryDto>, QueryRejection>,
    ) -> Result<impl IntoResponse, AppError> {
        let Query(query) = query?;
        let user_id = required_user_id(query.user_id.as_deref())?;

        let documents: Vec<DocumentResponseDto> = handler
            .list_documents_use_case
            .execute(user_id)
            .await?
            .into_iter()
            .map(DocumentResponseDto::from)
            .collect();

        Ok(Json(documents))
    }

    pub async fn get_document(
        State(handler): State<Arc<DocumentHandler>>,
        document_id: Result<Path<i64>, PathRejection>,
    ) -> Result<impl IntoResponse, AppError> {
        let Path(document_id) = document_id?;
        let document = handler.get_document_use_case.execute(document_id).await?;

        Ok(Json(DocumentResponseDto::from(document)))
    }

    pub async fn download_document(
        State(handler): State<Arc<DocumentHandler>>,
        document_id: Result<Path<i64>, PathRejection>,
    ) -> Result<impl IntoResponse, AppError> {
        let Path(document_id) = document_id?;
        let content = handler
            .get_document_use_case
            .execute_with_content(document_id)
            .await?;

        let headers = [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!(
                    "inline; filename=\"{}\"",
                    content.document.file_reference()
                ),
            ),
        ];

        Ok((headers, content.data))
    }
}
