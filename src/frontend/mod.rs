pub mod static_files;
pub mod templates;
mod types;

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

use crate::loader::ContentLoader;
use crate::site::{build_page, PageOptions};

pub use types::{ErrorResponse, PageQuery, SiteError};

#[derive(Clone)]
pub struct AppState {
    pub template: Arc<str>,
    pub loader: ContentLoader,
    pub content_file: PathBuf,
}

pub fn create_frontend_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/index.html", get(serve_index))
        .route("/data.json", get(serve_content))
        .merge(static_files::create_static_router())
        .with_state(state)
}

async fn serve_index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let options = PageOptions {
        nav_open: query.nav_open(),
    };
    let built = build_page(&state.loader, &state.template, options).await;
    Html(built.html)
}

async fn serve_content(State(state): State<AppState>) -> Result<impl IntoResponse, SiteError> {
    let body = tokio::fs::read(&state.content_file).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            warn!("Content file {} not found", state.content_file.display());
            SiteError::NotFound
        } else {
            SiteError::Io(e)
        }
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
