pub mod document_repository;
pub mod workspace_repository;

pub use document_repository::DocumentRepository;
pub use workspace_repository::WorkspaceRepository;
