use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::FileReference;

/// A persisted upload: metadata plus the text extracted from the PDF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    id: i64,
    title: String,
    file_reference: FileReference,
    extracted_text: String,
    uploaded_at: DateTime<Utc>,
    workspace_id: Option<i64>,
    user_id: i64,
}

impl Document {
    /// Rebuilds a document from stored state. Identity and `uploaded_at` are
    /// only ever produced by the repository.
    pub fn restore(
        id: i64,
        title: String,
        file_reference: FileReference,
        extracted_text: String,
        uploaded_at: DateTime<Utc>,
        workspace_id: Option<i64>,
        user_id: i64,
    ) -> Self {
        Self {
            id,
            title,
            file_reference,
            extracted_text,
            uploaded_at,
            workspace_id,
            user_id,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn file_reference(&self) -> &FileReference {
        &self.file_reference
    }

    pub fn extracted_text(&self) -> &str {
        &self.extracted_text
    }

    pub fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }

    pub fn workspace_id(&self) -> Option<i64> {
        self.workspace_id
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn is_attached(&self) -> bool {
        self.workspace_id.is_some()
    }

    pub fn set_workspace(&mut self, workspace_id: Option<i64>) {
        self.workspace_id = workspace_id;
    }
}

/// A document that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDocument {
    pub title: String,
    pub file_reference: FileReference,
    pub extracted_text: String,
    pub workspace_id: Option<i64>,
    pub user_id: i64,
}

impl NewDocument {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Document title cannot be empty".to_string());
        }

        if self.user_id <= 0 {
            return Err("Document must belong to a user".to_string());
        }

        if matches!(self.workspace_id, Some(id) if id <= 0) {
            return Err("Workspace id must be positive".to_string());
        }

        Ok(())
    }

    pub fn into_document(self, id: i64, uploaded_at: DateTime<Utc>) -> Document {
        Document::restore(
            id,
            self.title,
            self.file_reference,
            self.extracted_text,
            uploaded_at,
            self.workspace_id,
            self.user_id,
        )
    }
}
