//! Content loaders for reading protocol data from files.
//!
//! The catalog is stored as RON, the protocol configuration as TOML. Both are
//! validated against the compiled layout before they are handed out.

pub mod catalog;
pub mod config;
pub mod factory;

pub use catalog::{CATALOG_VERSION, CatalogFile, CatalogLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
