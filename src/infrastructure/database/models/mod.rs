pub mod document_model;
pub mod workspace_model;

pub use document_model::*;
pub use workspace_model::*;
