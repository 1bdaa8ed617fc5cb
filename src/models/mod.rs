pub mod version;

pub use version::{ListingMode, VersionId, VersionOrdering, LATEST_ALIAS};
