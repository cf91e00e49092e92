//! Line-driven host for a single RPG character.
//!
//! The client is the composition root: it reads [`ClientConfig`] from the
//! environment, loads content through `rpg-content`, installs file logging
//! and drives a [`Session`] from any async line source.
//!
//! ```text
//! stdin ──→ InputHandler ──→ Character::dispatch ──→ status line ──→ stdout
//! ```

pub mod config;
pub mod input;
pub mod logging;
pub mod session;

pub use config::{ClientConfig, StatusFormat};
pub use input::{Command, InputError, InputHandler};
pub use logging::setup_logging;
pub use session::{Session, SessionBuilder, SessionError, SessionSummary, Step};

use anyhow::{Context, Result};
use rpg_content::ContentFactory;

/// Builds a session from the configured (or bundled) content directory.
pub fn build_session(config: &ClientConfig) -> Result<Session> {
    let factory = match &config.content_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };
    tracing::info!("Loading content from {}", factory.data_dir().display());

    let game_config = factory
        .load_config()
        .context("Failed to load game config")?;
    let items = factory.load_items().context("Failed to load items")?;
    let quests = factory.load_quests().context("Failed to load quests")?;
    tracing::info!("Loaded {} items and {} quests", items.len(), quests.len());

    Session::builder()
        .client_config(config)
        .game_config(game_config)
        .items(items)
        .quests(quests)
        .build()
}
