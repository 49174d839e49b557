use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::domain::entities::{Document, NewDocument};
use crate::domain::repositories::{DocumentRepository, document_repository::DocumentRepositoryError};
use crate::infrastructure::database::models::{DocumentModel, NewDocumentModel};
use crate::infrastructure::database::schema::documents;
use crate::infrastructure::database::{DatabaseError, DbPool, with_connection};

pub struct PostgresDocumentRepository {
    pool: DbPool,
}

impl PostgresDocumentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl From<DatabaseError> for DocumentRepositoryError {
    fn from(error: DatabaseError) -> Self {
        DocumentRepositoryError::DatabaseError(error.to_string())
    }
}

/// Maps a failed insert/update, attributing FK violations to `workspace_id`.
fn map_write_error(error: DieselError, workspace_id: Option<i64>) -> DocumentRepositoryError {
    match (&error, workspace_id) {
        (DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _), Some(ws)) => {
            DocumentRepositoryError::WorkspaceNotFound(ws)
        }
        (DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, info), _) => {
            DocumentRepositoryError::ValidationError(info.message().to_string())
        }
        _ => DocumentRepositoryError::DatabaseError(error.to_string()),
    }
}

fn to_domain(models: Vec<DocumentModel>) -> Result<Vec<Document>, DocumentRepositoryError> {
    models
        .into_iter()
        .map(|model| Document::try_from(model).map_err(DocumentRepositoryError::DatabaseError))
        .collect()
}

#[async_trait]
impl DocumentRepository for PostgresDocumentRepository {
    async fn create(&self, document: NewDocument) -> Result<Document, DocumentRepositoryError> {
        document
            .validate()
            .map_err(DocumentRepositoryError::ValidationError)?;

        let workspace_id = document.workspace_id;
        let new_document = NewDocumentModel::from(document);

        let model = with_connection(&self.pool, move |conn| {
            diesel::insert_into(documents::table)
                .values(&new_document)
                .returning(DocumentModel::as_returning())
                .get_result(conn)
                .map_err(|e| map_write_error(e, workspace_id))
        })
        .await?;

        Document::try_from(model).map_err(DocumentRepositoryError::DatabaseError)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Document>, DocumentRepositoryError> {
        let model = with_connection(&self.pool, move |conn| {
            documents::table
                .find(id)
                .select(DocumentModel::as_select())
                .first(conn)
                .optional()
                .map_err(|e| DocumentRepositoryError::DatabaseError(e.to_string()))
        })
        .await?;

        model
            .map(|m| Document::try_from(m).map_err(DocumentRepositoryError::DatabaseError))
            .transpose()
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Document>, DocumentRepositoryError> {
        let models = with_connection(&self.pool, move |conn| {
            documents::table
                .filter(documents::user_id.eq(user_id))
                .order(documents::id.asc())
                .select(DocumentModel::as_select())
                .load(conn)
                .map_err(|e| DocumentRepositoryError::DatabaseError(e.to_string()))
        })
        .await?;

        to_domain(models)
    }

    async fn find_by_workspace(
        &self,
        workspace_id: i64,
    ) -> Result<Vec<Document>, DocumentRepositoryError> {
        let models = with_connection(&self.pool, move |conn| {
            documents::table
                .filter(documents::workspace_id.eq(workspace_id))
                .order(documents::id.asc())
                .select(DocumentModel::as_select())
                .load(conn)
                .map_err(|e| DocumentRepositoryError::DatabaseError(e.to_string()))
        })
        .await?;

        to_domain(models)
    }

    async fn set_workspace(
        &self,
        document_id: i64,
        workspace_id: Option<i64>,
    ) -> Result<(), DocumentRepositoryError> {
        // One UPDATE per call: readers see the old link or the new one.
        let updated = with_connection(&self.pool, move |conn| {
            diesel::update(documents::table.find(document_id))
                .set(documents::workspace_id.eq(workspace_id))
                .execute(conn)
                .map_err(|e| map_write_error(e, workspace_id))
        })
        .await?;

        if updated == 0 {
            return Err(DocumentRepositoryError::NotFound(document_id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn database_error(kind: DatabaseErrorKind, message: &str) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(message.to_string()))
    }

    #[test]
    fn test_foreign_key_violation_names_the_workspace() {
        let error = database_error(
            DatabaseErrorKind::ForeignKeyViolation,
            "insert or update on table \"documents\" violates foreign key constraint",
        );

        assert!(matches!(
            map_write_error(error, Some(42)),
            DocumentRepositoryError::WorkspaceNotFound(42)
        ));
    }

    #[test]
    fn test_foreign_key_violation_without_workspace_is_a_database_error() {
        let error = database_error(DatabaseErrorKind::ForeignKeyViolation, "fk");

        assert!(matches!(
            map_write_error(error, None),
            DocumentRepositoryError::DatabaseError(_)
        ));
    }

    #[test]
    fn test_check_violation_is_a_validation_error() {
        let error = database_error(
            DatabaseErrorKind::CheckViolation,
            "new row violates check constraint \"documents_title_check\"",
        );

        match map_write_error(error, Some(1)) {
            DocumentRepositoryError::ValidationError(msg) => {
                assert!(msg.contains("documents_title_check"))
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_other_failures_are_database_errors() {
        assert!(matches!(
            map_write_error(DieselError::NotFound, Some(1)),
            DocumentRepositoryError::DatabaseError(_)
        ));
        assert!(matches!(
            map_write_error(
                database_error(DatabaseErrorKind::UniqueViolation, "duplicate key"),
                None
            ),
            DocumentRepositoryError::DatabaseError(_)
        ));
    }
}
