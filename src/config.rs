use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::models::{ListingMode, VersionOrdering};

/// Service configuration
#[derive(Debug, Clone)]
pub struct IndexConfig {
    pub downloads_dir: PathBuf,
    pub marker_file: PathBuf,
    /// URL prefix placed in front of every artifact link
    pub base_path: String,
    pub mode: ListingMode,
    pub ordering: VersionOrdering,
    pub bind_addr: SocketAddr,
    pub title: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: {message}")]
    Invalid { var: &'static str, message: String },
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            downloads_dir: PathBuf::from("downloads"),
            marker_file: PathBuf::from("latest_version"),
            base_path: "downloads".to_string(),
            mode: ListingMode::Marker,
            ordering: VersionOrdering::Lexicographic,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            title: "youtube-dl".to_string(),
        }
    }
}

impl IndexConfig {
    /// Defaults overridden by `DLINDEX_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("DLINDEX_DOWNLOADS_DIR") {
            config.downloads_dir = PathBuf::from(dir);
        }
        if let Some(marker) = lookup("DLINDEX_MARKER_FILE") {
            config.marker_file = PathBuf::from(marker);
        }
        if let Some(base) = lookup("DLINDEX_BASE_PATH") {
            config.base_path = base.trim_end_matches('/').to_string();
        }
        if let Some(mode) = lookup("DLINDEX_MODE") {
            config.mode = mode.parse().map_err(|message| ConfigError::Invalid {
                var: "DLINDEX_MODE",
                message,
            })?;
        }
        if let Some(ordering) = lookup("DLINDEX_ORDERING") {
            config.ordering = ordering.parse().map_err(|message| ConfigError::Invalid {
                var: "DLINDEX_ORDERING",
                message,
            })?;
        }
        if let Some(bind) = lookup("DLINDEX_BIND") {
            config.bind_addr = bind.parse().map_err(|e| ConfigError::Invalid {
                var: "DLINDEX_BIND",
                message: format!("Invalid bind address {}: {}", bind, e),
            })?;
        }
        if let Some(title) = lookup("DLINDEX_TITLE") {
            config.title = title;
        }

        Ok(config)
    }
}
