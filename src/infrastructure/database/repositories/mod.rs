pub mod postgres_document_repository;
pub mod postgres_workspace_repository;

pub use postgres_document_repository::PostgresDocumentRepository;
pub use postgres_workspace_repository::PostgresWorkspaceRepository;
