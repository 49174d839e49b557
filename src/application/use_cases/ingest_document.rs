use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::application::ports::{ContentStore, TextExtractor};
use crate::domain::entities::{Document, NewDocument};
use crate::domain::repositories::document_repository::DocumentRepositoryError;
use crate::domain::repositories::{DocumentRepository, WorkspaceRepository};
use crate::domain::value_objects::{IngestionStage, IngestionState};

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug)]
pub enum IngestDocumentError {
    ValidationError(String),
    PayloadTooLarge { size: usize, limit: usize },
    StageFailed { stage: IngestionStage, cause: String },
}

impl IngestDocumentError {
    fn stage(stage: IngestionStage, cause: impl std::fmt::Display) -> Self {
        IngestDocumentError::StageFailed {
            stage,
            cause: cause.to_string(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        !matches!(self, IngestDocumentError::StageFailed { .. })
    }
}

impl std::fmt::Display for IngestDocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestDocumentError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            IngestDocumentError::PayloadTooLarge { size, limit } => write!(
                f,
                "Payload too large: {} bytes exceeds the {} byte limit",
                size, limit
            ),
            IngestDocumentError::StageFailed { stage, cause } => {
                write!(f, "Ingestion failed during {}: {}", stage, cause)
            }
        }
    }
}

impl std::error::Error for IngestDocumentError {}

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// Raw form values as they arrived; parsing happens while validating.
#[derive(Debug, Clone, Default)]
pub struct IngestDocumentRequest {
    pub title: Option<String>,
    pub user_id: Option<String>,
    pub workspace_id: Option<String>,
    pub file: Option<UploadedFile>,
}

#[derive(Debug, Clone)]
pub struct IngestDocumentResponse {
    pub document: Document,
    pub page_count: usize,
    pub state: IngestionState,
}

struct ValidatedUpload {
    title: String,
    user_id: i64,
    workspace_id: Option<i64>,
    file: UploadedFile,
}

pub struct IngestDocumentUseCase {
    content_store: Arc<dyn ContentStore>,
    text_extractor: Arc<dyn TextExtractor>,
    document_repository: Arc<dyn DocumentRepository>,
    workspace_repository: Arc<dyn WorkspaceRepository>,
    max_upload_bytes: usize,
}

impl IngestDocumentUseCase {
    pub fn new(
        content_store: Arc<dyn ContentStore>,
        text_extractor: Arc<dyn TextExtractor>,
        document_repository: Arc<dyn DocumentRepository>,
        workspace_repository: Arc<dyn WorkspaceRepository>,
    ) -> Self {
        Self {
            content_store,
            text_extractor,
            document_repository,
            workspace_repository,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn with_max_upload_bytes(mut self, limit: usize) -> Self {
        self.max_upload_bytes = limit;
        self
    }

    /// Runs validate, store, extract and persist in order. The first failure
    /// ends the run; earlier stages are not undone.
    pub async fn execute(
        &self,
        request: IngestDocumentRequest,
    ) -> Result<IngestDocumentResponse, IngestDocumentError> {
        let mut state = IngestionState::Validating;

        let upload = match self.validate(request).await {
            Ok(upload) => upload,
            Err(e) => return Err(self.abort(&state, e)),
        };
        state = self.advance(state)?;

        let file_reference = match self
            .content_store
            .store(&upload.file.data, &upload.file.file_name)
            .await
        {
            Ok(reference) => reference,
            Err(e) => {
                let error = IngestDocumentError::stage(IngestionStage::Store, e);
                return Err(self.abort(&state, error));
            }
        };
        debug!(
            file_reference = %file_reference,
            bytes = upload.file.data.len(),
            "Stored upload"
        );
        state = self.advance(state)?;

        let extracted = match self.text_extractor.extract_text(&file_reference).await {
            Ok(extracted) => extracted,
            Err(e) => {
                warn!(
                    file_reference = %file_reference,
                    "Leaving stored file in place after failed extraction"
                );
                let error = IngestDocumentError::stage(IngestionStage::Extract, e);
                return Err(self.abort(&state, error));
            }
        };
        state = self.advance(state)?;

        let new_document = NewDocument {
            title: upload.title,
            file_reference,
            extracted_text: extracted.text,
            workspace_id: upload.workspace_id,
            user_id: upload.user_id,
        };

        let document = match self.document_repository.create(new_document).await {
            Ok(document) => document,
            Err(DocumentRepositoryError::WorkspaceNotFound(id)) => {
                let message = format!("Workspace {} does not exist", id);
                let error = IngestDocumentError::ValidationError(message);
                return Err(self.abort(&state, error));
            }
            Err(e) => {
                let error = IngestDocumentError::stage(IngestionStage::Persist, e);
                return Err(self.abort(&state, error));
            }
        };
        state = self.advance(state)?;

        info!(
            document_id = document.id(),
            user_id = document.user_id(),
            pages = extracted.page_count,
            "Document ingested"
        );

        Ok(IngestDocumentResponse {
            document,
            page_count: extracted.page_count,
            state,
        })
    }

    async fn validate(
        &self,
        request: IngestDocumentRequest,
    ) -> Result<ValidatedUpload, IngestDocumentError> {
        let file = request.file.ok_or_else(|| {
            IngestDocumentError::ValidationError("PDF file not provided".to_string())
        })?;

        let title = request
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| IngestDocumentError::ValidationError("Title is required".to_string()))?;

        if file.data.len() > self.max_upload_bytes {
            return Err(IngestDocumentError::PayloadTooLarge {
                size: file.data.len(),
                limit: self.max_upload_bytes,
            });
        }

        if file.data.is_empty() {
            return Err(IngestDocumentError::ValidationError(
                "PDF file is empty".to_string(),
            ));
        }

        let user_id = parse_id("user_id", request.user_id.as_deref())?.ok_or_else(|| {
            IngestDocumentError::ValidationError("user_id is required".to_string())
        })?;
        let workspace_id = parse_id("workspace_id", request.workspace_id.as_deref())?;

        if let Some(id) = workspace_id {
            let workspace = self
                .workspace_repository
                .find_by_id(id)
                .await
                .map_err(|e| IngestDocumentError::stage(IngestionStage::Validate, e))?;
            if workspace.is_none() {
                return Err(IngestDocumentError::ValidationError(format!(
                    "Workspace {} does not exist",
                    id
                )));
            }
        }

        Ok(ValidatedUpload {
            title,
            user_id,
            workspace_id,
            file,
        })
    }

    fn advance(&self, state: IngestionState) -> Result<IngestionState, IngestDocumentError> {
        let next = state.advance().map_err(|cause| IngestDocumentError::StageFailed {
            stage: state.stage().unwrap_or(IngestionStage::Persist),
            cause,
        })?;
        debug!(from = %state, to = %next, "Ingestion transition");
        Ok(next)
    }

    fn abort(&self, state: &IngestionState, error: IngestDocumentError) -> IngestDocumentError {
        match state.fail(error.to_string()) {
            Ok(failed) if error.is_client_error() => warn!(state = %failed, "Upload rejected"),
            Ok(failed) => error!(state = %failed, "Ingestion failed"),
            Err(transition) => error!(%transition, cause = %error, "Ingestion failed"),
        }
        error
    }
}

/// Absent or blank means "not given"; anything else must be a positive integer.
fn parse_id(field: &str, raw: Option<&str>) -> Result<Option<i64>, IngestDocumentError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(Some(id)),
        _ => Err(IngestDocumentError::ValidationError(format!(
            "{} must be a positive integer, got '{}'",
            field, raw
        ))),
    }
}
