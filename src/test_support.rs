//! In-memory stand-ins for the database, content store and PDF parser.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::content_store::{ContentStore, ContentStoreError};
use crate::application::ports::text_extractor::{
    ExtractedText, TextExtractionError, TextExtractor,
};
use crate::domain::entities::{Document, NewDocument, NewWorkspace, Workspace};
use crate::domain::repositories::document_repository::{
    DocumentRepository, DocumentRepositoryError,
};
use crate::domain::repositories::workspace_repository::{
    WorkspaceRepository, WorkspaceRepositoryError,
};
use crate::domain::value_objects::FileReference;

#[derive(Default)]
struct Tables {
    documents: BTreeMap<i64, Document>,
    workspaces: BTreeMap<i64, Workspace>,
    next_document_id: i64,
    next_workspace_id: i64,
}

/// Both repositories over one lock, so cascades behave like a transaction.
#[derive(Default)]
pub struct InMemoryDatabase {
    tables: Mutex<Tables>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document_count(&self) -> usize {
        self.tables.lock().unwrap().documents.len()
    }

    pub fn document(&self, id: i64) -> Option<Document> {
        self.tables.lock().unwrap().documents.get(&id).cloned()
    }

    /// Every attached document points at a live workspace.
    pub fn links_are_consistent(&self) -> bool {
        let tables = self.tables.lock().unwrap();
        tables
            .documents
            .values()
            .filter_map(|d| d.workspace_id())
            .all(|ws| tables.workspaces.contains_key(&ws))
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDatabase {
    async fn create(&self, document: NewDocument) -> Result<Document, DocumentRepositoryError> {
        document
            .validate()
            .map_err(DocumentRepositoryError::ValidationError)?;

        let mut tables = self.tables.lock().unwrap();
        if let Some(ws) = document.workspace_id {
            if !tables.workspaces.contains_key(&ws) {
                return Err(DocumentRepositoryError::WorkspaceNotFound(ws));
            }
        }

        tables.next_document_id += 1;
        let id = tables.next_document_id;
        let created = document.into_document(id, Utc::now());
        tables.documents.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Document>, DocumentRepositoryError> {
        Ok(self.document(id))
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Document>, DocumentRepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .documents
            .values()
            .filter(|d| d.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_workspace(
        &self,
        workspace_id: i64,
    ) -> Result<Vec<Document>, DocumentRepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .documents
            .values()
            .filter(|d| d.workspace_id() == Some(workspace_id))
            .cloned()
            .collect())
    }

    async fn set_workspace(
        &self,
        document_id: i64,
        workspace_id: Option<i64>,
    ) -> Result<(), DocumentRepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(ws) = workspace_id {
            if !tables.workspaces.contains_key(&ws) {
                return Err(DocumentRepositoryError::WorkspaceNotFound(ws));
            }
        }

        let document = tables
            .documents
            .get_mut(&document_id)
            .ok_or(DocumentRepositoryError::NotFound(document_id))?;
        document.set_workspace(workspace_id);
        Ok(())
    }
}

#[async_trait]
impl WorkspaceRepository for InMemoryDatabase {
    async fn create(&self, workspace: NewWorkspace) -> Result<Workspace, WorkspaceRepositoryError> {
        workspace
            .validate()
            .map_err(WorkspaceRepositoryError::ValidationError)?;

        let mut tables = self.tables.lock().unwrap();
        tables.next_workspace_id += 1;
        let id = tables.next_workspace_id;
        let created = workspace.into_workspace(id, Utc::now());
        tables.workspaces.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Workspace>, WorkspaceRepositoryError> {
        Ok(self.tables.lock().unwrap().workspaces.get(&id).cloned())
    }

    async fn find_by_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<Workspace>, WorkspaceRepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .workspaces
            .values()
            .filter(|w| w.user_id() == user_id)
            .cloned()
            .collect())
    }

    // Same contract as the Postgres transaction: check, detach, remove.
    async fn delete(&self, id: i64) -> Result<usize, WorkspaceRepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.workspaces.contains_key(&id) {
            return Err(WorkspaceRepositoryError::NotFound(id));
        }

        let mut detached = 0;
        for document in tables.documents.values_mut() {
            if document.workspace_id() == Some(id) {
                document.set_workspace(None);
                detached += 1;
            }
        }
        tables.workspaces.remove(&id);
        Ok(detached)
    }
}

#[derive(Default)]
pub struct InMemoryContentStore {
    files: Mutex<HashMap<String, Vec<u8>>>,
    counter: AtomicUsize,
    fail_writes: bool,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn store(
        &self,
        data: &[u8],
        original_name: &str,
    ) -> Result<FileReference, ContentStoreError> {
        if self.fail_writes {
            return Err(ContentStoreError::StorageFull);
        }

        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        let reference = FileReference::new(format!("{}_{}", n, original_name))
            .map_err(ContentStoreError::InvalidReference)?;
        self.files
            .lock()
            .unwrap()
            .insert(reference.as_str().to_string(), data.to_vec());
        Ok(reference)
    }

    async fn retrieve(&self, reference: &FileReference) -> Result<Vec<u8>, ContentStoreError> {
        self.files
            .lock()
            .unwrap()
            .get(reference.as_str())
            .cloned()
            .ok_or_else(|| ContentStoreError::NotFound(reference.to_string()))
    }
}

/// Returns canned text, or fails every call.
pub struct StubTextExtractor {
    outcome: Result<ExtractedText, String>,
}

impl StubTextExtractor {
    pub fn returning(text: &str, page_count: usize) -> Self {
        Self {
            outcome: Ok(ExtractedText {
                text: text.to_string(),
                page_count,
            }),
        }
    }

    pub fn failing(cause: &str) -> Self {
        Self {
            outcome: Err(cause.to_string()),
        }
    }
}

#[async_trait]
impl TextExtractor for StubTextExtractor {
    async fn extract_text(
        &self,
        _reference: &FileReference,
    ) -> Result<ExtractedText, TextExtractionError> {
        self.outcome
            .clone()
            .map_err(TextExtractionError::Corrupted)
    }
}

pub fn pdf_bytes() -> Vec<u8> {
    b"%PDF-1.4\n%stub\n".to_vec()
}
