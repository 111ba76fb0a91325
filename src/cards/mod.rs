//! Card system: definitions, decks, and per-expansion manifests.
//!
//! ## Key Types
//!
//! - `CardName`: Identifier for card definitions
//! - `CardDefinition`: Printed card data (type, cost, tags)
//! - `Deck`: Ordered, cheaply clonable list of definitions
//! - `CardManifest`: The three decks one expansion contributes

pub mod definition;
pub mod deck;
pub mod manifest;

pub use definition::{CardDefinition, CardName, CardType, Tag, Tags};
pub use deck::Deck;
pub use manifest::CardManifest;
