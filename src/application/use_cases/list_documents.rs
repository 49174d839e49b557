use std::sync::Arc;

use crate::domain::entities::Document;
use crate::domain::repositories::{
    DocumentRepository, document_repository::DocumentRepositoryError,
};

#[derive(Debug)]
pub enum ListDocumentsError {
    ValidationError(String),
    RepositoryError(String),
}

impl std::fmt::Display for ListDocumentsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListDocumentsError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ListDocumentsError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ListDocumentsError {}

impl From<DocumentRepositoryError> for ListDocumentsError {
    fn from(error: DocumentRepositoryError) -> Self {
        ListDocumentsError::RepositoryError(error.to_string())
    }
}

pub struct ListDocumentsUseCase {
    document_repository: Arc<dyn DocumentRepository>,
}

impl ListDocumentsUseCase {
    pub fn new(document_repository: Arc<dyn DocumentRepository>) -> Self {
        Self { document_repository }
    }

    pub async fn execute(&self, user_id: i64) -> Result<Vec<Document>, ListDocumentsError> {
        if user_id <= 0 {
            return Err(ListDocumentsError::ValidationError(
                "user_id must be a positive integer".to_string(),
            ));
        }

        Ok(self.document_repository.find_by_user(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewDocument;
    use crate::domain::value_objects::FileReference;
    use crate::test_support::InMemoryDatabase;

    async fn seed(db: &InMemoryDatabase, title: &str, user_id: i64) {
        DocumentRepository::create(
            db,
            NewDocument {
                title: title.to_string(),
                file_reference: FileReference::new(format!("1_{}.pdf", title)).unwrap(),
                extracted_text: String::new(),
                workspace_id: None,
                user_id,
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_lists_only_users_documents_in_insertion_order() {
        let db = Arc::new(InMemoryDatabase::new());
        seed(&db, "first", 1).await;
        seed(&db, "other", 2).await;
        seed(&db, "second", 1).await;

        let use_case = ListDocumentsUseCase::new(db);
        let docs = use_case.execute(1).await.unwrap();

        let titles: Vec<&str> = docs.iter().map(|d| d.title()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_no_documents_is_empty_not_error() {
        let use_case = ListDocumentsUseCase::new(Arc::new(InMemoryDatabase::new()));
        assert!(use_case.execute(42).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_non_positive_user() {
        let use_case = ListDocumentsUseCase::new(Arc::new(InMemoryDatabase::new()));
        assert!(matches!(
            use_case.execute(0).await,
            Err(ListDocumentsError::ValidationError(_))
        ));
    }
}
