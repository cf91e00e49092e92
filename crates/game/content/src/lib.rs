//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Item catalogs (data-driven via RON)
//! - Quest catalogs (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed by hosts when building a character session and never
//! appears in character state. All loaders use rpg-core types directly with
//! serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemLoader, QuestLoader};
