use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::render::render_unavailable;
use crate::repository::RepositoryError;

/// Failure while serving the index page
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Error paired with the page title so the 500 page matches the site
pub struct IndexErrorPage {
    pub error: IndexError,
    pub title: String,
}

impl IntoResponse for IndexErrorPage {
    fn into_response(self) -> Response {
        tracing::error!("Failed to render index: {}", self.error);

        let status = match self.error {
            IndexError::Repository(RepositoryError::Unavailable { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Html(render_unavailable(&self.title))).into_response()
    }
}
