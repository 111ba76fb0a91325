//! Core types shared by the catalog and the game log.
//!
//! - `PlayerId`: identifier of a seated player
//! - `GameModule`, `GameOptions`: which expansions a game uses
//! - `CatalogError`: errors raised while validating or parsing catalog data

pub mod player;
pub mod config;
pub mod error;

pub use player::PlayerId;
pub use config::{GameModule, GameOptions};
pub use error::CatalogError;
