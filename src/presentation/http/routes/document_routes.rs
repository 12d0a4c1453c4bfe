use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::presentation::http::handlers::DocumentHandler;

pub fn document_routes(document_handler: Arc<DocumentHandler>) -> Router {
    Router::new()
        .route(
            "/documents",
            post(DocumentHandler::upload_document).get(DocumentHandler::list_documents),
        )
        .route(
            "/documents/{id}",
            get(DocumentHandler::get_document).delete(DocumentHandler::delete_document),
        )
        .route(
            "/documents/{id}/status",
            get(DocumentHandler::get_document_status),
        )
        .with_state(document_handler)
}
