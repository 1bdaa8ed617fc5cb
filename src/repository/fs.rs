use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{parse_marker, ArtifactRepository, RepositoryError};
use crate::config::IndexConfig;
use crate::models::{ListingMode, VersionId, VersionOrdering};

/// Filesystem-backed repository; re-reads the disk on every call
pub struct FsRepository {
    downloads_dir: PathBuf,
    marker_file: PathBuf,
    mode: ListingMode,
    ordering: VersionOrdering,
}

impl FsRepository {
    pub fn new(config: &IndexConfig) -> Self {
        Self {
            downloads_dir: config.downloads_dir.clone(),
            marker_file: config.marker_file.clone(),
            mode: config.mode,
            ordering: config.ordering,
        }
    }

    async fn scan(&self) -> Result<Vec<VersionId>, RepositoryError> {
        let unavailable = |source: std::io::Error| RepositoryError::Unavailable {
            path: self.downloads_dir.clone(),
            source,
        };

        let mut entries = tokio::fs::read_dir(&self.downloads_dir)
            .await
            .map_err(unavailable)?;
        let mut versions = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(unavailable)? {
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    debug!("Skipping non UTF-8 entry {:?}", raw);
                    continue;
                }
            };

            if !VersionId::is_listable(&name, self.mode) {
                continue;
            }
            if !is_dir(&entry.path()).await {
                debug!("Skipping non-directory entry {}", name);
                continue;
            }

            versions.push(VersionId::new(name));
        }

        self.ordering.sort(&mut versions);
        debug!(
            "Found {} versions in {}",
            versions.len(),
            self.downloads_dir.display()
        );
        Ok(versions)
    }

    async fn read_marker(&self) -> Result<Option<VersionId>, RepositoryError> {
        let content = tokio::fs::read_to_string(&self.marker_file)
            .await
            .map_err(|source| RepositoryError::Unavailable {
                path: self.marker_file.clone(),
                source,
            })?;
        Ok(parse_marker(&content))
    }
}

/// Follows symlinks, so a `latest -> 2.0` link counts as a directory
async fn is_dir(path: &Path) -> bool {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata.is_dir(),
        Err(e) => {
            debug!("Cannot stat {}: {}", path.display(), e);
            false
        }
    }
}

#[async_trait]
impl ArtifactRepository for FsRepository {
    fn mode(&self) -> ListingMode {
        self.mode
    }

    async fn list_versions(&self) -> Result<Vec<VersionId>, RepositoryError> {
        if !self.mode.lists_versions() {
            return Ok(Vec::new());
        }
        self.scan().await
    }

    async fn latest_version(&self) -> Result<Option<VersionId>, RepositoryError> {
        match self.mode {
            ListingMode::Marker => self.read_marker().await,
            ListingMode::Scan | ListingMode::ScanAlias => Ok(self.list_versions().await?.pop()),
        }
    }
}
