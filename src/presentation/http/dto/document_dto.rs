use serde::{Deserialize, Serialize};

use crate::application::use_cases::ingest_document::IngestDocumentResponse;
use crate::domain::entities::Document;

#[derive(Debug, Serialize)]
pub struct DocumentResponseDto {
    pub id: i64,
    pub title: String,
    pub file_reference: String,
    pub extracted_text: String,
    pub uploaded_at: String,
    pub workspace_id: Option<i64>,
    pub user_id: i64,
}

impl From<Document> for DocumentResponseDto {
    fn from(document: Document) -> Self {
        Self {
            id: document.id(),
            title: document.title().to_string(),
            file_reference: document.file_reference().to_string(),
            extracted_text: document.extracted_text().to_string(),
            uploaded_at: document.uploaded_at().to_rfc3339(),
            workspace_id: document.workspace_id(),
            user_id: document.user_id(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadResponseDto {
    pub document_id: i64,
    pub title: String,
    pub workspace_id: Option<i64>,
    pub page_count: usize,
    pub status: String,
    pub message: String,
}

impl From<IngestDocumentResponse> for UploadResponseDto {
    fn from(response: IngestDocumentResponse) -> Self {
        Self {
            document_id: response.document.id(),
            title: response.document.title().to_string(),
            workspace_id: response.document.workspace_id(),
            page_count: response.page_count,
            status: response.state.to_string(),
            message: "Document uploaded successfully".to_string(),
        }
    }
}

/// `user_id` stays a raw string so a bad value is reported as 400 with a message.
#[derive(Debug, Deserialize)]
pub struct UserQueryDto {
    pub user_id: Option<String>,
}
