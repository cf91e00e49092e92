//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// How the character status is written after each action.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatusFormat {
    /// One human-readable line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Configuration required to bootstrap a client session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub character_name: String,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub content_dir: Option<PathBuf>,
    pub status_format: StatusFormat,
    pub weight_limit: f32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            character_name: "Hero".to_string(),
            session_id: None,
            log_dir: None,
            content_dir: None,
            status_format: StatusFormat::default(),
            weight_limit: Self::DEFAULT_WEIGHT_LIMIT,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_WEIGHT_LIMIT: f32 = 50.0;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RPG_CHARACTER_NAME` - Name shown in the status line (default: Hero)
    /// - `RPG_SESSION_ID` - Session identifier for log files (default: timestamp)
    /// - `RPG_LOG_DIR` - Directory for log files (default: platform cache dir)
    /// - `RPG_CONTENT_DIR` - Directory with config.toml/items.ron/quests.ron
    ///   (default: bundled content)
    /// - `RPG_STATUS_FORMAT` - `text` or `json` (default: text)
    /// - `RPG_INVENTORY_WEIGHT_LIMIT` - Inventory weight limit (default: 50)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(name) = env::var("RPG_CHARACTER_NAME")
            && !name.trim().is_empty()
        {
            config.character_name = name;
        }

        config.session_id = env::var("RPG_SESSION_ID").ok();
        config.log_dir = env::var("RPG_LOG_DIR").ok().map(PathBuf::from);
        config.content_dir = env::var("RPG_CONTENT_DIR").ok().map(PathBuf::from);

        if let Some(format) = read_env::<StatusFormat>("RPG_STATUS_FORMAT") {
            config.status_format = format;
        }

        if let Some(limit) = read_env::<f32>("RPG_INVENTORY_WEIGHT_LIMIT")
            && limit.is_finite()
        {
            config.weight_limit = limit.max(0.0);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
