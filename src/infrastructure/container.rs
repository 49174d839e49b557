use std::sync::Arc;
use tracing::info;

use crate::{
    application::{
        ports::{ContentStore, TextExtractor},
        use_cases::{
            AddDocumentToWorkspaceUseCase, CreateWorkspaceUseCase, DeleteWorkspaceUseCase,
            GetDocumentUseCase, IngestDocumentUseCase, ListDocumentsUseCase,
            ListWorkspaceDocumentsUseCase, ListWorkspacesUseCase,
            RemoveDocumentFromWorkspaceUseCase,
        },
    },
    config::AppConfig,
    domain::repositories::{DocumentRepository, WorkspaceRepository},
    infrastructure::{
        database::{
            create_connection_pool,
            repositories::{PostgresDocumentRepository, PostgresWorkspaceRepository},
            run_migrations,
        },
        external_services::PdfTextExtractor,
        file_system::LocalContentStore,
    },
    presentation::http::{
        HttpServer,
        handlers::{DocumentHandler, WorkspaceHandler},
    },
};

pub struct AppContainer {
    document_handler: Arc<DocumentHandler>,
    workspace_handler: Arc<WorkspaceHandler>,
    config: AppConfig,
}

impl AppContainer {
    pub async fn new(config: AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let db_pool = create_connection_pool(&config.database_url, config.database_pool_size)
            .map_err(|e| format!("Failed to create database pool: {}", e))?;

        if config.run_migrations {
            let pool = db_pool.clone();
            let applied = tokio::task::spawn_blocking(move || run_migrations(&pool))
                .await?
                .map_err(|e| format!("Failed to run database migrations: {}", e))?;
            info!(applied, "Database migrations complete");
        }

        // Create repositories
        let document_repository: Arc<dyn DocumentRepository> =
            Arc::new(PostgresDocumentRepository::new(db_pool.clone()));
        let workspace_repository: Arc<dyn WorkspaceRepository> =
            Arc::new(PostgresWorkspaceRepository::new(db_pool.clone()));

        // Create content store and extractor
        let local_store = LocalContentStore::new(config.upload_dir.clone());
        local_store
            .ensure_directory_exists()
            .await
            .map_err(|e| format!("Failed to prepare upload directory: {}", e))?;
        info!(upload_dir = %local_store.base_path().display(), "Content store ready");

        let content_store: Arc<dyn ContentStore> = Arc::new(local_store);
        let text_extractor: Arc<dyn TextExtractor> =
            Arc::new(PdfTextExtractor::new(content_store.clone()));

        // Create use cases
        let ingest_document_use_case = Arc::new(
            IngestDocumentUseCase::new(
                content_store.clone(),
                text_extractor.clone(),
                document_repository.clone(),
                workspace_repository.clone(),
            )
            .with_max_upload_bytes(config.max_upload_bytes),
        );
        let list_documents_use_case =
            Arc::new(ListDocumentsUseCase::new(document_repository.clone()));
        let get_document_use_case = Arc::new(GetDocumentUseCase::new(
            document_repository.clone(),
            content_store.clone(),
        ));

        let create_workspace_use_case =
            Arc::new(CreateWorkspaceUseCase::new(workspace_repository.clone()));
        let list_workspaces_use_case =
            Arc::new(ListWorkspacesUseCase::new(workspace_repository.clone()));
        let delete_workspace_use_case =
            Arc::new(DeleteWorkspaceUseCase::new(workspace_repository.clone()));
        let add_document_use_case = Arc::new(AddDocumentToWorkspaceUseCase::new(
            document_repository.clone(),
            workspace_repository.clone(),
        ));
        let remove_document_use_case = Arc::new(RemoveDocumentFromWorkspaceUseCase::new(
            document_repository.clone(),
        ));
        let list_workspace_documents_use_case = Arc::new(ListWorkspaceDocumentsUseCase::new(
            document_repository.clone(),
            workspace_repository.clone(),
        ));

        // Create HTTP handlers
        let document_handler = Arc::new(DocumentHandler::new(
            ingest_document_use_case,
            list_documents_use_case,
            get_document_use_case,
        ));
        let workspace_handler = Arc::new(WorkspaceHandler::new(
            create_workspace_use_case,
            list_workspaces_use_case,
            delete_workspace_use_case,
            add_document_use_case,
            remove_document_use_case,
            list_workspace_documents_use_case,
        ));

        Ok(Self {
            document_handler,
            workspace_handler,
            config,
        })
    }

    pub fn http_server(&self) -> HttpServer {
        HttpServer::new(
            self.document_handler.clone(),
            self.workspace_handler.clone(),
            self.config.port,
            self.config.max_upload_bytes,
        )
    }
}
