pub mod document_dto;
pub mod response_dto;
pub mod workspace_dto;

pub use document_dto::*;
pub use response_dto::*;
pub use workspace_dto::*;
