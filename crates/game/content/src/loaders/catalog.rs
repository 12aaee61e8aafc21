//! Species and zone catalog loader.

use std::path::Path;

use froglin_core::{Catalog, CatalogSpec, SpeciesSpec, ZoneSpec};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Catalog table version the compiled circuits expect.
pub const CATALOG_VERSION: u32 = 1;

/// Catalog file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub version: u32,
    pub zones: Vec<ZoneSpec>,
    pub species: Vec<SpeciesSpec>,
}

impl From<CatalogFile> for CatalogSpec {
    fn from(file: CatalogFile) -> Self {
        CatalogSpec {
            zones: file.zones,
            species: file.species,
        }
    }
}

/// Loader for the catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and validate the catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate catalog RON.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let file: CatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;
        if file.version != CATALOG_VERSION {
            anyhow::bail!(
                "Catalog version {} does not match supported version {}",
                file.version,
                CATALOG_VERSION
            );
        }

        let catalog = Catalog::from_spec(&file.into())
            .map_err(|e| anyhow::anyhow!("Invalid catalog: {}", e))?;
        tracing::info!(version = CATALOG_VERSION, "catalog loaded");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_version() {
        let err = CatalogLoader::parse("(version: 2, zones: [], species: [])")
            .expect_err("version 2 is unsupported");
        assert!(err.to_string().contains("version 2"));
    }

    #[test]
    fn rejects_incomplete_tables() {
        let err = CatalogLoader::parse("(version: 1, zones: [], species: [])")
            .expect_err("zones are missing");
        assert!(err.to_string().contains("Invalid catalog"));
    }
}
