//! Process-wide card catalog.
//!
//! `CardCatalog` combines every expansion manifest and exposes one deck
//! per manifest for each card category. `GameDecks` is the flattened card
//! pool for a single game, selected from the catalog by `GameOptions`.

pub mod registry;
pub mod selection;

pub use registry::CardCatalog;
pub use selection::GameDecks;
