use axum::{response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod artifacts;
mod config;
mod error;
mod index;
mod models;
mod render;
mod repository;

use config::IndexConfig;
use repository::{ArtifactRepository, FsRepository};

#[derive(Clone)]
pub struct AppState {
    config: Arc<IndexConfig>,
    repository: Arc<dyn ArtifactRepository>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "download_index=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = IndexConfig::from_env()?;
    info!(
        "Serving {} releases from {} (mode: {}, ordering: {})",
        config.title,
        match config.mode {
            models::ListingMode::Marker => config.marker_file.display(),
            _ => config.downloads_dir.display(),
        },
        config.mode,
        config.ordering
    );

    let repository: Arc<dyn ArtifactRepository> = Arc::new(FsRepository::new(&config));
    let addr = config.bind_addr;

    let state = AppState {
        config: Arc::new(config),
        repository,
    };

    let app = Router::new()
        .route("/health", get(health))
        .merge(index::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_reports_version() {
        let app: Router = Router::new().route("/health", get(health));

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(
            String::from_utf8(body.to_vec()).unwrap(),
            format!(
                r#"{{"status":"healthy","version":"{}"}}"#,
                env!("CARGO_PKG_VERSION")
            )
        );
    }
}
