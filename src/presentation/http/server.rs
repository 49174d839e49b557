use axum::{Router, extract::DefaultBodyLimit};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::presentation::http::{
    handlers::{DocumentHandler, WorkspaceHandler},
    routes::{document_routes, health_routes, workspace_routes},
};

/// Room for multipart boundaries and the text fields around the PDF part.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

pub struct HttpServer {
    document_handler: Arc<DocumentHandler>,
    workspace_handler: Arc<WorkspaceHandler>,
    port: u16,
    max_upload_bytes: usize,
}

impl HttpServer {
    pub fn new(
        document_handler: Arc<DocumentHandler>,
        workspace_handler: Arc<WorkspaceHandler>,
        port: u16,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            document_handler,
            workspace_handler,
            port,
            max_upload_bytes,
        }
    }

    pub fn router(&self) -> Router {
        let body_limit = self.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES);

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .merge(health_routes())
            .merge(document_routes(self.document_handler.clone()))
            .merge(workspace_routes(self.workspace_handler.clone()))
            .layer(cors)
            .layer(DefaultBodyLimit::max(body_limit))
            .layer(RequestBodyLimitLayer::new(body_limit))
            .layer(
                TraceLayer::new_for_http()
                    .on_request(
                        |request: &axum::http::Request<axum::body::Body>, _span: &tracing::Span| {
                            tracing::info!(
                                "Received request: {} {}",
                                request.method(),
                                request.uri()
                            );
                        },
                    )
                    .on_response(
                        |response: &axum::http::Response<axum::body::Body>,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::info!(
                                "Response: {} (took {} ms)",
                                response.status(),
                                latency.as_millis()
                            );
                        },
                    )
                    .on_failure(
                        |error: ServerErrorsFailureClass,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::error!(
                                "Request failed: {:?} (took {} ms)",
                                error,
                                latency.as_millis()
                            );
                        },
                    ),
            )
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));

        let listener = TcpListener::bind(addr).await?;
        info!("Listening on {}", addr);
        axum::serve(listener, app).await?;

        Ok(())
    }
}
