use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::presentation::http::handlers::QueryHandler;

pub fn query_routes(query_handler: Arc<QueryHandler>) -> Router {
    Router::new()
        .route("/query", post(QueryHandler::answer_query))
        .route("/queries", get(QueryHandler::recent_queries))
        .with_state(query_handler)
}
