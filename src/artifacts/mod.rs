use crate::models::{ListingMode, VersionId, LATEST_ALIAS};

const PROGRAM: &str = "youtube-dl";

/// The downloadable files published for every release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Binary,
    WindowsBinary,
    SourceArchive,
}

impl ArtifactKind {
    /// Display order on the index page
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Binary,
        ArtifactKind::WindowsBinary,
        ArtifactKind::SourceArchive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::Binary => "Linux, macOS and other Unix",
            ArtifactKind::WindowsBinary => "Windows executable",
            ArtifactKind::SourceArchive => "Source tarball",
        }
    }

    pub fn file_name(self, version: &VersionId) -> String {
        match self {
            ArtifactKind::Binary => PROGRAM.to_string(),
            ArtifactKind::WindowsBinary => format!("{}.exe", PROGRAM),
            ArtifactKind::SourceArchive => format!("{}-{}.tar.gz", PROGRAM, version),
        }
    }
}

/// One link in the "latest downloads" block. Values are unescaped.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactLink {
    pub kind: ArtifactKind,
    pub href: String,
    pub file_name: String,
}

/// Links for the latest release. Marker-based indexes serve files through
/// the `latest` alias directory; scanned ones link the version directory.
pub fn latest_links(base_path: &str, mode: ListingMode, version: &VersionId) -> Vec<ArtifactLink> {
    let segment = match mode {
        ListingMode::Marker => LATEST_ALIAS,
        ListingMode::Scan | ListingMode::ScanAlias => version.as_str(),
    };

    ArtifactKind::ALL
        .iter()
        .map(|&kind| {
            let file_name = kind.file_name(version);
            ArtifactLink {
                kind,
                href: join(base_path, &[segment, file_name.as_str()]),
                file_name,
            }
        })
        .collect()
}

/// Link to a version's directory for the full listing
pub fn version_dir_href(base_path: &str, version: &VersionId) -> String {
    let mut href = join(base_path, &[version.as_str()]);
    href.push('/');
    href
}

fn join(base_path: &str, segments: &[&str]) -> String {
    let mut out = base_path.trim_end_matches('/').to_string();
    for segment in segments {
        out.push('/');
        out.push_str(segment);
    }
    out
}
