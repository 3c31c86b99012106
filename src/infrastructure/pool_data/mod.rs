//! Metadata sources for pool descriptors

pub mod file_source;
pub mod github_source;

pub use file_source::FilePoolDataSource;
pub use github_source::{GithubPoolDataSource, DEFAULT_POOLS_URL, DEFAULT_RAW_BASE_URL};
