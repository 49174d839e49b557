pub mod content_store;
pub mod text_extractor;

pub use content_store::ContentStore;
pub use text_extractor::TextExtractor;
