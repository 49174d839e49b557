pub mod pdf_text_extractor;

pub use pdf_text_extractor::PdfTextExtractor;
