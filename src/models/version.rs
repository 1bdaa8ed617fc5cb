use std::cmp::Ordering;

/// Name of the alias directory that always points at the newest release
pub const LATEST_ALIAS: &str = "latest";

/// A release identifier, taken verbatim from a directory name or marker file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionId(String);

impl VersionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a directory entry name may be listed as a version
    pub fn is_listable(name: &str, mode: ListingMode) -> bool {
        if name.is_empty() || name.starts_with('.') {
            return false;
        }
        !(mode == ListingMode::ScanAlias && name == LATEST_ALIAS)
    }
}

impl std::fmt::Display for VersionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the release listing comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMode {
    /// Every non-hidden entry of the downloads directory is a version
    Scan,
    /// Like `Scan`, but the `latest` alias directory is skipped
    ScanAlias,
    /// A single marker file names the latest version; no listing
    Marker,
}

impl ListingMode {
    pub fn lists_versions(self) -> bool {
        !matches!(self, ListingMode::Marker)
    }
}

impl std::fmt::Display for ListingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingMode::Scan => write!(f, "scan"),
            ListingMode::ScanAlias => write!(f, "scan_alias"),
            ListingMode::Marker => write!(f, "marker"),
        }
    }
}

impl std::str::FromStr for ListingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scan" => Ok(ListingMode::Scan),
            "scan_alias" => Ok(ListingMode::ScanAlias),
            "marker" => Ok(ListingMode::Marker),
            _ => Err(format!("Invalid listing mode: {}", s)),
        }
    }
}

/// Sort order applied to version listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionOrdering {
    /// Plain string order: "10.0" sorts before "2.0"
    Lexicographic,
    /// Numeric-aware order over `.`/`-` separated segments
    Natural,
}

impl VersionOrdering {
    pub fn compare(self, a: &VersionId, b: &VersionId) -> Ordering {
        match self {
            VersionOrdering::Lexicographic => a.as_str().cmp(b.as_str()),
            VersionOrdering::Natural => natural_cmp(a.as_str(), b.as_str()),
        }
    }

    pub fn sort(self, versions: &mut [VersionId]) {
        versions.sort_by(|a, b| self.compare(a, b));
    }
}

impl std::fmt::Display for VersionOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionOrdering::Lexicographic => write!(f, "lexicographic"),
            VersionOrdering::Natural => write!(f, "natural"),
        }
    }
}

impl std::str::FromStr for VersionOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lexicographic" => Ok(VersionOrdering::Lexicographic),
            "natural" => Ok(VersionOrdering::Natural),
            _ => Err(format!("Invalid version ordering: {}", s)),
        }
    }
}

/// Segment-wise comparison; numeric segments compare as numbers and sort
/// before textual ones. Falls back to string order so the result is total.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.split(['.', '-']);
    let mut right = b.split(['.', '-']);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ord = match (l.parse::<u64>(), r.parse::<u64>()) {
                    (Ok(x), Ok(y)) => x.cmp(&y),
                    (Ok(_), Err(_)) => Ordering::Less,
                    (Err(_), Ok(_)) => Ordering::Greater,
                    (Err(_), Err(_)) => l.cmp(r),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}
