pub mod file_reference;
pub mod ingestion_state;

pub use file_reference::FileReference;
pub use ingestion_state::{IngestionStage, IngestionState};
