use std::sync::Arc;

use crate::application::ports::{ContentStore, content_store::ContentStoreError};
use crate::domain::entities::Document;
use crate::domain::repositories::{
    DocumentRepository, document_repository::DocumentRepositoryError,
};

#[derive(Debug)]
pub enum GetDocumentError {
    DocumentNotFound(i64),
    ContentMissing(String),
    RepositoryError(String),
    StorageError(String),
}

impl std::fmt::Display for GetDocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetDocumentError::DocumentNotFound(id) => write!(f, "Document not found: {}", id),
            GetDocumentError::ContentMissing(reference) => {
                write!(f, "Stored file missing: {}", reference)
            }
            GetDocumentError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
            GetDocumentError::StorageError(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for GetDocumentError {}

impl From<DocumentRepositoryError> for GetDocumentError {
    fn from(error: DocumentRepositoryError) -> Self {
        match error {
            DocumentRepositoryError::NotFound(id) => GetDocumentError::DocumentNotFound(id),
            _ => GetDocumentError::RepositoryError(error.to_string()),
        }
    }
}

impl From<ContentStoreError> for GetDocumentError {
    fn from(error: ContentStoreError) -> Self {
        match error {
            ContentStoreError::NotFound(reference) => GetDocumentError::ContentMissing(reference),
            _ => GetDocumentError::StorageError(error.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DocumentContent {
    pub document: Document,
    pub data: Vec<u8>,
}

pub struct GetDocumentUseCase {
    document_repository: Arc<dyn DocumentRepository>,
    content_store: Arc<dyn ContentStore>,
}

impl GetDocumentUseCase {
    pub fn new(
        document_repository: Arc<dyn DocumentRepository>,
        content_store: Arc<dyn ContentStore>,
    ) -> Self {
        Self {
            document_repository,
            content_store,
        }
    }

    pub async fn execute(&self, document_id: i64) -> Result<Document, GetDocumentError> {
        self.document_repository
            .find_by_id(document_id)
            .await?
            .ok_or(GetDocumentError::DocumentNotFound(document_id))
    }

    /// The record together with the raw bytes it was extracted from.
    pub async fn execute_with_content(
        &self,
        document_id: i64,
    ) -> Result<DocumentContent, GetDocumentError> {
        let document = self.execute(document_id).await?;
        let data = self.content_store.retrieve(document.file_reference()).await?;

        Ok(DocumentContent { document, data })
    }
}
