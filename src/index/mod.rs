use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use crate::error::{IndexError, IndexErrorPage};
use crate::render::{render_index, IndexPage};
use crate::repository::ArtifactRepository;
use crate::AppState;

pub fn routes() -> axum::Router<AppState> {
    axum::Router::new().route("/", axum::routing::get(index_page))
}

/// GET /
/// Render the download index from a fresh read of the release source
async fn index_page(State(state): State<AppState>) -> Result<impl IntoResponse, IndexErrorPage> {
    let listing = state
        .repository
        .snapshot()
        .await
        .map_err(|e| IndexErrorPage {
            error: IndexError::from(e),
            title: state.config.title.clone(),
        })?;

    Ok(Html(render_index(&IndexPage {
        title: &state.config.title,
        base_path: &state.config.base_path,
        mode: state.repository.mode(),
        listing: &listing,
    })))
}
