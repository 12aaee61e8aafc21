//! Content factory for building a session context from data files.

use std::path::{Path, PathBuf};

use froglin_core::{Catalog, GameConfig, GameContext};

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult};

/// Content factory that loads all protocol content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── catalog.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data files shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
    }

    /// Load protocol configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the species and zone catalog from `catalog.ron`.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let path = self.data_dir.join("catalog.ron");
        CatalogLoader::load(&path)
    }

    /// Load both files and build the session context (derives the hasher).
    pub fn load_context(&self) -> LoadResult<GameContext> {
        let config = self.load_config()?;
        let catalog = self.load_catalog()?;
        Ok(GameContext::new(config, catalog))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
