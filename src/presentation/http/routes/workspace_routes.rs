use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::presentation::http::handlers::WorkspaceHandler;

pub fn workspace_routes(workspace_handler: Arc<WorkspaceHandler>) -> Router {
    Router::new()
        .route("/workspace/create", post(WorkspaceHandler::create_workspace))
        .route("/workspace/get", get(WorkspaceHandler::list_workspaces))
        .route(
            "/workspace/delete",
            post(WorkspaceHandler::delete_workspace).delete(WorkspaceHandler::delete_workspace),
        )
        .route("/workspace/add-document", post(WorkspaceHandler::add_document))
        .route(
            "/workspace/remove-document",
            post(WorkspaceHandler::remove_document),
        )
        .route(
            "/workspace/{workspace_id}/documents",
            get(WorkspaceHandler::list_workspace_documents),
        )
        .with_state(workspace_handler)
}
