use std::env;

const ENABLE_ZK_PROVING: &str = "ENABLE_ZK_PROVING";

/// Proving configuration for a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProverConfig {
    /// When false, sessions build requests but skip proving (dry run).
    pub enable_proving: bool,
}

impl ProverConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ProverConfig::from_env`] with variables read through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // Enable ZK proving if environment variable is set
        if let Some(value) = lookup(ENABLE_ZK_PROVING) {
            // Also accept just setting the variable without value as "true"
            config.enable_proving = parse_bool(&value).unwrap_or(true);
        }

        config
    }

    pub fn enabled() -> Self {
        Self {
            enable_proving: true,
        }
    }

    pub fn dry_run() -> Self {
        Self {
            enable_proving: false,
        }
    }
}

impl Default for ProverConfig {
    fn default() -> Self {
        Self::dry_run()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_flag(value: Option<&str>) -> ProverConfig {
        ProverConfig::from_lookup(|key| {
            assert_eq!(key, ENABLE_ZK_PROVING);
            value.map(str::to_owned)
        })
    }

    #[test]
    fn unset_flag_is_dry_run() {
        assert_eq!(with_flag(None), ProverConfig::dry_run());
    }

    #[test]
    fn truthy_values_enable_proving() {
        for value in ["1", "true", "YES", " on "] {
            assert_eq!(with_flag(Some(value)), ProverConfig::enabled(), "{value}");
        }
    }

    #[test]
    fn falsy_values_keep_dry_run() {
        for value in ["0", "off", "False", "no"] {
            assert_eq!(with_flag(Some(value)), ProverConfig::dry_run(), "{value}");
        }
    }

    #[test]
    fn bare_flag_enables_proving() {
        assert_eq!(with_flag(Some("")), ProverConfig::enabled());
    }
}
