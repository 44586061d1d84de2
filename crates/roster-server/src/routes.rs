//! HTTP routes: the query explorer page and the GraphQL endpoint.

use async_graphql_axum::{GraphQLBatchRequest, GraphQLResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use roster_core::RosterSchema;
use std::path::PathBuf;
use std::sync::Arc;

/// Token in the explorer page replaced by the GraphQL route
pub const ENDPOINT_TOKEN: &str = "{{graphql_endpoint}}";

/// State shared by the route handlers
#[derive(Clone)]
pub struct AppState {
    /// Executable schema bound to the person store
    pub schema: RosterSchema,
    /// HTML file served at `/`
    pub explorer_page: Arc<PathBuf>,
    /// Route the GraphQL endpoint is mounted on
    pub graphql_path: Arc<str>,
}

impl AppState {
    /// State serving `schema` at `graphql_path` and the page at `explorer_page`
    pub fn new(schema: RosterSchema, explorer_page: PathBuf, graphql_path: &str) -> Self {
        Self {
            schema,
            explorer_page: Arc::new(explorer_page),
            graphql_path: Arc::from(graphql_path),
        }
    }
}

/// Build the router serving `/` and the GraphQL route
pub fn router(state: AppState) -> Router {
    let graphql_path = state.graphql_path.clone();

    Router::new()
        .route("/", get(explorer_page))
        .route(&graphql_path, get(graphql_handler).post(graphql_handler))
        .with_state(state)
}

/// Serve the explorer page, read from disk on every request
async fn explorer_page(State(state): State<AppState>) -> impl IntoResponse {
    match tokio::fs::read_to_string(state.explorer_page.as_ref()).await {
        Ok(page) => Html(page.replace(ENDPOINT_TOKEN, &state.graphql_path)).into_response(),
        Err(e) => {
            tracing::error!(
                path = %state.explorer_page.display(),
                error = %e,
                "Failed to read explorer page"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, "explorer page unavailable").into_response()
        }
    }
}

/// GraphQL request handler
async fn graphql_handler(
    State(state): State<AppState>,
    req: GraphQLBatchRequest,
) -> GraphQLResponse {
    state.schema.execute_batch(req.into_inner()).await.into()
}
