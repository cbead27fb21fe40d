use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Not found")]
    NotFound,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            SiteError::NotFound => (StatusCode::NOT_FOUND, "Resource not found"),
            SiteError::Io(ref _e) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        let body = Json(ErrorResponse {
            error: message.to_string(),
        });

        (status, body).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Query string of the page route.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// `open` renders the navigation menu expanded.
    pub nav: Option<String>,
}

impl PageQuery {
    pub fn nav_open(&self) -> bool {
        self.nav.as_deref() == Some("open")
    }
}
