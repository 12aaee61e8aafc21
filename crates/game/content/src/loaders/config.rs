//! Protocol configuration loader.

use std::path::Path;

use froglin_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for protocol configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Fails when the capacities differ from the compiled circuit layout.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate config TOML.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;

        tracing::debug!(
            item_slots = config.item_slots,
            froglin_slots = config.froglin_slots,
            stash_depth = config.stash_depth,
            "config loaded"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compiled_layout() {
        let config = ConfigLoader::parse("item_slots = 8\nfroglin_slots = 8\nstash_depth = 254\n")
            .expect("layout matches");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn rejects_capacity_drift() {
        let err = ConfigLoader::parse("item_slots = 4\nfroglin_slots = 8\nstash_depth = 254\n")
            .expect_err("item_slots differs");
        assert!(err.to_string().contains("item_slots"));
    }
}
