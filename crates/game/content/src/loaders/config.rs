//! Game configuration loader.

use std::path::Path;

use rpg_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
damage_step = 0.1

[speeds]
sprint = 1200.0
"#,
        )
        .unwrap();

        assert_eq!(config.damage_step, 0.1);
        assert_eq!(config.heal_step, GameConfig::DEFAULT_PRESS_STEP);
        assert_eq!(config.speeds.sprint, 1200.0);
        assert_eq!(config.speeds.walk, 500.0);
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn malformed_config_is_an_error() {
        let err = ConfigLoader::parse("damage_step = \"lots\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
