/// Protocol configuration shared with the circuits.
///
/// The capacities are compile-time constants; the runtime fields exist so a
/// loaded `config.toml` can be checked against them before a session starts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of item slots in a player's inventory.
    pub item_slots: usize,
    /// Number of froglin slots in a player's inventory.
    pub froglin_slots: usize,
    /// Maximum depth of the stash tree (one level per key bit).
    pub stash_depth: usize,
}

impl GameConfig {
    // ===== compile-time constants used as array lengths =====
    pub const ITEM_MAX: usize = 8;
    pub const FROGLIN_MAX: usize = 8;
    pub const STASH_DEPTH: usize = 254;

    // ===== serialized widths =====
    pub const ITEM_SIZE: usize = 2;
    pub const FROGLIN_SIZE: usize = 7;
    /// `[mana, claimed_mana, level, stash_root]` before the slot arrays.
    pub const PLAYER_HEADER: usize = 4;
    pub const PLAYER_SIZE: usize =
        Self::PLAYER_HEADER + Self::ITEM_SIZE * Self::ITEM_MAX + Self::FROGLIN_SIZE * Self::FROGLIN_MAX;

    pub fn new() -> Self {
        Self {
            item_slots: Self::ITEM_MAX,
            froglin_slots: Self::FROGLIN_MAX,
            stash_depth: Self::STASH_DEPTH,
        }
    }

    /// Checks that runtime capacities agree with the compiled circuit layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("item_slots", Self::ITEM_MAX, self.item_slots),
            ("froglin_slots", Self::FROGLIN_MAX, self.froglin_slots),
            ("stash_depth", Self::STASH_DEPTH, self.stash_depth),
        ];
        for (field, expected, actual) in checks {
            if expected != actual {
                return Err(ConfigError::CapacityMismatch {
                    field,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("`{field}` is {actual} but the circuits are compiled for {expected}")]
    CapacityMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl crate::error::GameError for ConfigError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CapacityMismatch { .. } => "CONFIG_CAPACITY_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_compiled_layout() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
        assert_eq!(GameConfig::PLAYER_SIZE, 4 + 16 + 56);
    }

    #[test]
    fn rejects_capacity_drift() {
        let config = GameConfig {
            froglin_slots: 16,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::CapacityMismatch {
                field: "froglin_slots",
                expected: 8,
                actual: 16,
            })
        );
    }
}
