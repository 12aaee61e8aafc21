use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::hash::Hasher;

/// Session-wide capabilities: protocol config, the hash engine, and the
/// catalog. Built once at session start and handed to every [`Player`].
///
/// [`Player`]: crate::state::Player
#[derive(Clone, Debug)]
pub struct GameContext {
    pub config: GameConfig,
    pub hasher: Hasher,
    pub catalog: Arc<Catalog>,
}

impl GameContext {
    pub fn new(config: GameConfig, catalog: Catalog) -> Self {
        Self {
            config,
            hasher: Hasher::new(),
            catalog: Arc::new(catalog),
        }
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new(GameConfig::default(), Catalog::builtin())
    }
}
