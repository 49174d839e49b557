use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::entities::{Document, NewDocument};
use crate::domain::value_objects::FileReference;
use crate::infrastructure::database::schema::documents;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = documents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DocumentModel {
    pub id: i64,
    pub title: String,
    pub file_reference: String,
    pub extracted_text: String,
    pub uploaded_at: DateTime<Utc>,
    pub workspace_id: Option<i64>,
    pub user_id: i64,
}

/// Insert row. `id` and `uploaded_at` are left to the database defaults.
#[derive(Debug, Insertable)]
#[diesel(table_name = documents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewDocumentModel {
    pub title: String,
    pub file_reference: String,
    pub extracted_text: String,
    pub workspace_id: Option<i64>,
    pub user_id: i64,
}

impl From<NewDocument> for NewDocumentModel {
    fn from(document: NewDocument) -> Self {
        Self {
            title: document.title,
            file_reference: document.file_reference.into(),
            extracted_text: document.extracted_text,
            workspace_id: document.workspace_id,
            user_id: document.user_id,
        }
    }
}

impl TryFrom<DocumentModel> for Document {
    type Error = String;

    fn try_from(model: DocumentModel) -> Result<Self, Self::Error> {
        let file_reference = FileReference::new(model.file_reference)
            .map_err(|e| format!("Invalid file reference on document {}: {}", model.id, e))?;

        Ok(Document::restore(
            model.id,
            model.title,
            file_reference,
            model.extracted_text,
            model.uploaded_at,
            model.workspace_id,
            model.user_id,
        ))
    }
}
