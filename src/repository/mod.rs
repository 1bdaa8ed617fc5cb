//! Read-only access to published releases.
//!
//! Rendering only ever talks to [`ArtifactRepository`]; the filesystem
//! adapter backs the running service and the in-memory one backs tests.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::models::{ListingMode, VersionId};

pub use fs::FsRepository;
#[cfg(test)]
pub use memory::MemoryRepository;

mod fs;
#[cfg(test)]
mod memory;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Release listing unavailable at {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Everything the index page needs from one read of the source
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseListing {
    pub latest: Option<VersionId>,
    /// `None` when the source only names the latest release
    pub versions: Option<Vec<VersionId>>,
}

#[async_trait]
pub trait ArtifactRepository: Send + Sync {
    fn mode(&self) -> ListingMode;

    /// All versions, sorted; empty when the source does not enumerate them
    async fn list_versions(&self) -> Result<Vec<VersionId>, RepositoryError>;

    /// Newest version; `None` when nothing has been published
    async fn latest_version(&self) -> Result<Option<VersionId>, RepositoryError>;

    /// Reads the source once and derives both the latest release and the listing
    async fn snapshot(&self) -> Result<ReleaseListing, RepositoryError> {
        if self.mode().lists_versions() {
            let versions = self.list_versions().await?;
            Ok(ReleaseListing {
                latest: versions.last().cloned(),
                versions: Some(versions),
            })
        } else {
            Ok(ReleaseListing {
                latest: self.latest_version().await?,
                versions: None,
            })
        }
    }
}

/// Trims marker content; blank means nothing has been published yet
pub(crate) fn parse_marker(content: &str) -> Option<VersionId> {
    let version = content.trim();
    if version.is_empty() {
        None
    } else {
        Some(VersionId::new(version))
    }
}
