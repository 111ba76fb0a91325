//! # tfm-catalog
//!
//! Card catalog and game log entries for a Terraforming Mars style
//! board game.
//!
//! ## Design Principles
//!
//! 1. **Build Once, Read Forever**: The catalog is assembled from constant
//!    manifest data on first use and never mutated afterwards.
//!
//! 2. **Projection, Not Merging**: Catalog deck collections keep one deck
//!    per expansion manifest, in manifest order. Flattening into a game's
//!    card pool is a separate, explicit step (`CardCatalog::decks_for`).
//!
//! 3. **Facts Are Immutable**: A `LogEntry` cannot be changed after it is
//!    built, and its timestamp never precedes an earlier entry's.
//!
//! ## Modules
//!
//! - `core`: Player ids, game options, errors
//! - `cards`: Card definitions, decks, manifests
//! - `expansions`: Built-in manifest data per expansion
//! - `catalog`: The process-wide card catalog and per-game selection
//! - `log`: Game log entries

pub mod core;
pub mod cards;
pub mod expansions;
pub mod catalog;
pub mod log;

// Re-export commonly used types
pub use crate::core::{CatalogError, GameModule, GameOptions, PlayerId};

pub use crate::cards::{CardDefinition, CardManifest, CardName, CardType, Deck, Tag};

pub use crate::catalog::{CardCatalog, GameDecks};

pub use crate::log::{LogEntry, LogMessageData, LogMessageDataType, LogMessageType};
