use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

use crate::application::ports::content_store::{ContentStore, ContentStoreError};
use crate::domain::value_objects::FileReference;

const MAX_NAME_LEN: usize = 100;
const FALLBACK_NAME: &str = "upload.pdf";

/// Stores uploads as flat files under `base_path`, named
/// `<nanosecond stamp>_<sanitized original name>`.
pub struct LocalContentStore {
    base_path: PathBuf,
    last_stamp: AtomicU64,
}

impl LocalContentStore {
    pub fn new(base_path: PathBuf) -> Self {
        Self {
            base_path,
            last_stamp: AtomicU64::new(0),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub async fn ensure_directory_exists(&self) -> Result<(), ContentStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(ContentStoreError::from)
    }

    fn path_for(&self, reference: &FileReference) -> PathBuf {
        self.base_path.join(reference.as_str())
    }

    /// Wall-clock nanoseconds, bumped so that no two calls share a value.
    fn next_stamp(&self) -> u64 {
        let now = Utc::now().timestamp_nanos_opt().unwrap_or_default().max(0) as u64;
        let mut prev = self.last_stamp.load(Ordering::Relaxed);
        loop {
            let next = now.max(prev + 1);
            match self.last_stamp.compare_exchange_weak(
                prev,
                next,
                Ordering::SeqCst,
                Ordering::Relaxed,
            ) {
                Ok(_) => return next,
                Err(actual) => prev = actual,
            }
        }
    }
}

/// Keeps only the final path component and replaces anything outside
/// `[A-Za-z0-9._-]` with `_`.
pub fn sanitize_file_name(original_name: &str) -> String {
    let base = original_name
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .take(MAX_NAME_LEN)
        .collect();

    if cleaned.trim_matches('.').is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        cleaned
    }
}

async fn write_fully(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;
    file.write_all(data).await?;
    file.flush().await?;
    file.sync_all().await?;
    Ok(())
}

#[async_trait]
impl ContentStore for LocalContentStore {
    async fn store(
        &self,
        data: &[u8],
        original_name: &str,
    ) -> Result<FileReference, ContentStoreError> {
        self.ensure_directory_exists().await?;

        let name = format!("{}_{}", self.next_stamp(), sanitize_file_name(original_name));
        let reference = FileReference::new(name).map_err(ContentStoreError::InvalidReference)?;
        let final_path = self.path_for(&reference);
        let temp_path = self.base_path.join(format!(".{}.part", reference));

        let written = match write_fully(&temp_path, data).await {
            Ok(()) => fs::rename(&temp_path, &final_path).await,
            Err(e) => Err(e),
        };

        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&temp_path).await {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    warn!(
                        path = %temp_path.display(),
                        error = %cleanup,
                        "Could not remove partial upload"
                    );
                }
            }
            return Err(ContentStoreError::from(e));
        }

        Ok(reference)
    }

    async fn retrieve(&self, reference: &FileReference) -> Result<Vec<u8>, ContentStoreError> {
        fs::read(self.path_for(reference))
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ContentStoreError::NotFound(reference.to_string()),
                _ => ContentStoreError::from(e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_store_and_retrieve() {
        let dir = tempdir().unwrap();
        let store = LocalContentStore::new(dir.path().join("uploads"));

        let reference = store.store(b"%PDF-1.4 body", "invoice.pdf").await.unwrap();

        assert!(reference.as_str().ends_with("_invoice.pdf"));
        assert!(dir.path().join("uploads").join(reference.as_str()).is_file());
        assert_eq!(store.retrieve(&reference).await.unwrap(), b"%PDF-1.4 body");
    }

    #[tokio::test]
    async fn test_same_name_gets_distinct_references() {
        let dir = tempdir().unwrap();
        let store = LocalContentStore::new(dir.path().to_path_buf());

        let a = store.store(b"one", "same.pdf").await.unwrap();
        let b = store.store(b"two", "same.pdf").await.unwrap();

        assert_ne!(a, b);
        assert_eq!(store.retrieve(&a).await.unwrap(), b"one");
        assert_eq!(store.retrieve(&b).await.unwrap(), b"two");
    }

    #[tokio::test]
    async fn test_no_partial_files_left_behind() {
        let dir = tempdir().unwrap();
        let store = LocalContentStore::new(dir.path().to_path_buf());
        store.store(b"data", "a.pdf").await.unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();

        assert_eq!(names.len(), 1);
        assert!(!names[0].ends_with(".part"));
    }

    #[tokio::test]
    async fn test_store_failure_returns_no_reference() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, b"x").unwrap();
        let store = LocalContentStore::new(blocker);

        assert!(store.store(b"data", "a.pdf").await.is_err());
    }

    #[tokio::test]
    async fn test_retrieve_missing() {
        let dir = tempdir().unwrap();
        let store = LocalContentStore::new(dir.path().to_path_buf());
        let reference = FileReference::new("1_missing.pdf".to_string()).unwrap();

        assert!(matches!(
            store.retrieve(&reference).await,
            Err(ContentStoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("report.pdf"), "report.pdf");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\Users\\me\\my file.pdf"), "my_file.pdf");
        assert_eq!(sanitize_file_name(""), "upload.pdf");
        assert_eq!(sanitize_file_name(".."), "upload.pdf");
        assert_eq!(sanitize_file_name(&"a".repeat(300)).len(), 100);
    }

    #[test]
    fn test_stamps_strictly_increase() {
        let store = LocalContentStore::new(PathBuf::from("unused"));
        let mut last = 0;
        for _ in 0..1000 {
            let stamp = store.next_stamp();
            assert!(stamp > last);
            last = stamp;
        }
    }
}
