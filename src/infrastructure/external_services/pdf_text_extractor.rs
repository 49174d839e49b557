use async_trait::async_trait;
use lopdf::Document;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::application::ports::content_store::{ContentStore, ContentStoreError};
use crate::application::ports::text_extractor::{
    ExtractedText, TextExtractionError, TextExtractor,
};
use crate::domain::value_objects::FileReference;

/// Extracts text from PDFs held in the content store using lopdf.
pub struct PdfTextExtractor {
    content_store: Arc<dyn ContentStore>,
    password: String,
}

impl PdfTextExtractor {
    pub fn new(content_store: Arc<dyn ContentStore>) -> Self {
        Self {
            content_store,
            password: String::new(),
        }
    }
}

/// Parses the PDF and pulls text from every page in parallel. Pages are
/// joined in page order; pages that fail are skipped unless all of them do.
pub fn extract_pdf_text(
    bytes: &[u8],
    password: &str,
) -> Result<ExtractedText, TextExtractionError> {
    let mut doc =
        Document::load_mem(bytes).map_err(|e| TextExtractionError::Corrupted(e.to_string()))?;

    if doc.is_encrypted() {
        doc.decrypt(password)
            .map_err(|_| TextExtractionError::Encrypted)?;
    }

    let page_numbers: Vec<u32> = doc.get_pages().into_keys().collect();
    let page_count = page_numbers.len();

    let mut pages: Vec<(u32, Result<String, String>)> = page_numbers
        .into_par_iter()
        .map(|page_num| {
            let text = doc
                .extract_text(&[page_num])
                .map_err(|e| format!("page {}: {}", page_num, e));
            (page_num, text)
        })
        .collect();
    pages.sort_by_key(|(page_num, _)| *page_num);

    let mut lines = Vec::new();
    let mut errors = Vec::new();
    for (_, result) in pages {
        match result {
            Ok(text) => lines.extend(
                text.split('\n')
                    .map(|line| line.trim_end().to_string())
                    .filter(|line| !line.is_empty()),
            ),
            Err(e) => errors.push(e),
        }
    }

    if page_count > 0 && errors.len() == page_count {
        return Err(TextExtractionError::ExtractionFailed(errors.join("; ")));
    }
    if !errors.is_empty() {
        warn!(failed_pages = errors.len(), page_count, "Some PDF pages could not be read");
    }

    Ok(ExtractedText {
        text: lines.join("\n"),
        page_count,
    })
}

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_text(
        &self,
        reference: &FileReference,
    ) -> Result<ExtractedText, TextExtractionError> {
        let bytes = self
            .content_store
            .retrieve(reference)
            .await
            .map_err(|e| match e {
                ContentStoreError::NotFound(r) => {
                    TextExtractionError::Unreadable(format!("{} is missing", r))
                }
                other => TextExtractionError::Unreadable(other.to_string()),
            })?;

        let password = self.password.clone();
        let extracted = tokio::task::spawn_blocking(move || extract_pdf_text(&bytes, &password))
            .await
            .map_err(|e| {
                TextExtractionError::ExtractionFailed(format!("Task join error: {}", e))
            })??;

        debug!(
            file_reference = %reference,
            pages = extracted.page_count,
            chars = extracted.text.len(),
            "Extracted PDF text"
        );
        Ok(extracted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InMemoryContentStore;
    use lopdf::content::{Content, Operation};
    use lopdf::{Object, Stream, dictionary};

    /// Builds a small PDF with one line of Helvetica text per page.
    fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Count" => kids.len() as i64,
                "Kids" => kids,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_extracts_pages_in_order() {
        let bytes = build_pdf(&["Invoice 42", "Total due 100"]);

        let extracted = extract_pdf_text(&bytes, "").unwrap();

        assert_eq!(extracted.page_count, 2);
        let first = extracted.text.find("Invoice 42").unwrap();
        let second = extracted.text.find("Total due 100").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            extract_pdf_text(b"definitely not a pdf", ""),
            Err(TextExtractionError::Corrupted(_))
        ));
    }

    #[tokio::test]
    async fn test_extract_via_store_leaves_bytes_untouched() {
        let store = Arc::new(InMemoryContentStore::new());
        let bytes = build_pdf(&["Hello"]);
        let reference = store.store(&bytes, "hello.pdf").await.unwrap();
        let extractor = PdfTextExtractor::new(store.clone());

        let extracted = extractor.extract_text(&reference).await.unwrap();

        assert!(extracted.text.contains("Hello"));
        assert_eq!(store.retrieve(&reference).await.unwrap(), bytes);
    }

    #[tokio::test]
    async fn test_missing_reference_is_unreadable() {
        let extractor = PdfTextExtractor::new(Arc::new(InMemoryContentStore::new()));
        let reference = FileReference::new("1_gone.pdf".to_string()).unwrap();

        assert!(matches!(
            extractor.extract_text(&reference).await,
            Err(TextExtractionError::Unreadable(_))
        ));
    }
}
