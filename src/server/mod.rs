//! HTTP API over the post repository
//!
//! The content snapshot is loaded once at startup; restart to pick up
//! edits.

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::{
    ContentStore, MarkdownRenderer, PostMetadata, SearchOutcome, StaticParam,
};
use crate::Site;

/// Server state
struct ServerState {
    site: Site,
    store: ContentStore,
    renderer: MarkdownRenderer,
}

#[derive(Debug, Default, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

/// Start the API server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let store = site.load_store()?;
    tracing::info!("Serving {} posts", store.len());

    let state = Arc::new(ServerState {
        site: site.clone(),
        store,
        renderer: MarkdownRenderer::new(),
    });
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: Arc<ServerState>) -> Router {
    let public_dir = state.site.public_dir.clone();
    Router::new()
        .route("/api/posts", get(list_posts))
        .route("/api/posts/:slug", get(show_post))
        .route("/api/params", get(list_params))
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn list_posts(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<SearchParams>,
) -> Json<SearchOutcome> {
    let repo = state.site.repository(&state.store);
    Json(repo.search_outcome(&params.q, &state.site.config))
}

async fn show_post(State(state): State<Arc<ServerState>>, Path(slug): Path<String>) -> Response {
    let repo = state.site.repository(&state.store);
    match repo.detail(&slug, &state.renderer, &state.site.config) {
        Some(detail) => Json(detail).into_response(),
        None => {
            tracing::debug!("No post for slug {:?}", slug);
            (StatusCode::NOT_FOUND, Json(PostMetadata::not_found())).into_response()
        }
    }
}

async fn list_params(State(state): State<Arc<ServerState>>) -> Json<Vec<StaticParam>> {
    Json(state.site.repository(&state.store).generate_static_params())
}
