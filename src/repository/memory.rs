use async_trait::async_trait;
use std::path::PathBuf;

use super::{parse_marker, ArtifactRepository, RepositoryError};
use crate::models::{ListingMode, VersionId, VersionOrdering};

/// In-memory stand-in for the downloads directory or marker file
pub struct MemoryRepository {
    mode: ListingMode,
    ordering: VersionOrdering,
    entries: Vec<String>,
    marker: Option<String>,
    unavailable: bool,
}

impl MemoryRepository {
    /// Directory listing with the given raw entry names, hidden ones included
    pub fn scan(mode: ListingMode, entries: &[&str]) -> Self {
        Self {
            mode,
            ordering: VersionOrdering::Lexicographic,
            entries: entries.iter().map(|e| e.to_string()).collect(),
            marker: None,
            unavailable: false,
        }
    }

    pub fn marker(content: &str) -> Self {
        Self {
            mode: ListingMode::Marker,
            ordering: VersionOrdering::Lexicographic,
            entries: Vec::new(),
            marker: Some(content.to_string()),
            unavailable: false,
        }
    }

    /// A source that fails every read
    pub fn unavailable(mode: ListingMode) -> Self {
        Self {
            mode,
            ordering: VersionOrdering::Lexicographic,
            entries: Vec::new(),
            marker: None,
            unavailable: true,
        }
    }

    pub fn with_ordering(mut self, ordering: VersionOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if self.unavailable {
            return Err(RepositoryError::Unavailable {
                path: PathBuf::from("memory"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such source"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ArtifactRepository for MemoryRepository {
    fn mode(&self) -> ListingMode {
        self.mode
    }

    async fn list_versions(&self) -> Result<Vec<VersionId>, RepositoryError> {
        self.check_available()?;
        if !self.mode.lists_versions() {
            return Ok(Vec::new());
        }

        let mut versions: Vec<VersionId> = self
            .entries
            .iter()
            .filter(|name| VersionId::is_listable(name, self.mode))
            .map(|name| VersionId::new(name.as_str()))
            .collect();
        self.ordering.sort(&mut versions);
        Ok(versions)
    }

    async fn latest_version(&self) -> Result<Option<VersionId>, RepositoryError> {
        self.check_available()?;
        match self.mode {
            ListingMode::Marker => Ok(self.marker.as_deref().and_then(parse_marker)),
            ListingMode::Scan | ListingMode::ScanAlias => Ok(self.list_versions().await?.pop()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_matches_filesystem_rules() {
        let repo = MemoryRepository::scan(ListingMode::ScanAlias, &["2.0", ".git", "latest", "1.0"]);
        let listing = repo.snapshot().await.unwrap();
        assert_eq!(listing.latest, Some(VersionId::new("2.0")));
        assert_eq!(
            listing.versions,
            Some(vec![VersionId::new("1.0"), VersionId::new("2.0")])
        );
    }

    #[tokio::test]
    async fn test_memory_natural_ordering() {
        let repo = MemoryRepository::scan(ListingMode::Scan, &["10.0", "2.0"])
            .with_ordering(VersionOrdering::Natural);
        assert_eq!(
            repo.latest_version().await.unwrap(),
            Some(VersionId::new("10.0"))
        );
    }

    #[tokio::test]
    async fn test_memory_unavailable() {
        let repo = MemoryRepository::unavailable(ListingMode::Marker);
        assert!(repo.snapshot().await.is_err());
    }
}
