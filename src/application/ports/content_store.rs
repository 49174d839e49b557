use async_trait::async_trait;

use crate::domain::value_objects::FileReference;

#[derive(Debug)]
pub enum ContentStoreError {
    NotFound(String),
    PermissionDenied(String),
    StorageFull,
    IoError(String),
    InvalidReference(String),
}

impl std::fmt::Display for ContentStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentStoreError::NotFound(reference) => {
                write!(f, "Stored file not found: {}", reference)
            }
            ContentStoreError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            ContentStoreError::StorageFull => write!(f, "Storage full"),
            ContentStoreError::IoError(msg) => write!(f, "IO error: {}", msg),
            ContentStoreError::InvalidReference(reference) => {
                write!(f, "Invalid file reference: {}", reference)
            }
        }
    }
}

impl std::error::Error for ContentStoreError {}

impl From<std::io::Error> for ContentStoreError {
    fn from(error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => ContentStoreError::NotFound(error.to_string()),
            std::io::ErrorKind::PermissionDenied => {
                ContentStoreError::PermissionDenied(error.to_string())
            }
            std::io::ErrorKind::StorageFull => ContentStoreError::StorageFull,
            _ => ContentStoreError::IoError(error.to_string()),
        }
    }
}

/// Durable home for raw uploaded bytes.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Writes the whole payload under a fresh name. Either every byte lands
    /// and a reference is returned, or nothing is visible under that name.
    async fn store(
        &self,
        data: &[u8],
        original_name: &str,
    ) -> Result<FileReference, ContentStoreError>;

    async fn retrieve(&self, reference: &FileReference) -> Result<Vec<u8>, ContentStoreError>;
}
