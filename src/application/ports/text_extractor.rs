use async_trait::async_trait;

use crate::domain::value_objects::FileReference;

#[derive(Debug)]
pub enum TextExtractionError {
    Unreadable(String),
    Corrupted(String),
    Encrypted,
    ExtractionFailed(String),
}

impl std::fmt::Display for TextExtractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextExtractionError::Unreadable(msg) => write!(f, "Unreadable file: {}", msg),
            TextExtractionError::Corrupted(msg) => write!(f, "Corrupted file: {}", msg),
            TextExtractionError::Encrypted => write!(f, "PDF is encrypted"),
            TextExtractionError::ExtractionFailed(msg) => write!(f, "Extraction failed: {}", msg),
        }
    }
}

impl std::error::Error for TextExtractionError {}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: usize,
}

/// Turns a stored PDF into plain text without touching the stored bytes.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(
        &self,
        reference: &FileReference,
    ) -> Result<ExtractedText, TextExtractionError>;
}
