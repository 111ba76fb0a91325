//! Per-game card pool selection.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::registry::CardCatalog;
use crate::cards::{CardDefinition, Deck};
use crate::core::GameOptions;

/// Flattened card pool for one game.
///
/// Built by `CardCatalog::decks_for`. Dealing and shuffling are left to
/// the rules engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDecks {
    pub project_cards: Deck,
    pub corporation_cards: Deck,
    pub prelude_cards: Deck,
}

impl GameDecks {
    /// Total number of cards in the pool.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.project_cards.len() + self.corporation_cards.len() + self.prelude_cards.len()
    }
}

impl CardCatalog {
    /// Concatenate the decks of every enabled module, in catalog order.
    ///
    /// Cards listed in an enabled manifest's `cards_to_remove` are dropped
    /// from the result. Manifests of disabled modules contribute nothing,
    /// including their removals.
    #[must_use]
    pub fn decks_for(&self, options: &GameOptions) -> GameDecks {
        let enabled: Vec<_> = self
            .manifests()
            .iter()
            .filter(|m| options.is_enabled(m.module))
            .collect();

        let removed: FxHashSet<&str> = enabled
            .iter()
            .flat_map(|m| m.cards_to_remove.iter().map(|n| n.as_str()))
            .collect();

        let mut decks = GameDecks::default();
        for manifest in &enabled {
            decks.project_cards.append(&manifest.project_cards);
            decks.corporation_cards.append(&manifest.corporation_cards);
            decks.prelude_cards.append(&manifest.prelude_cards);
        }

        if !removed.is_empty() {
            let keep = |c: &CardDefinition| !removed.contains(c.name.as_str());
            decks.project_cards.retain(keep);
            decks.corporation_cards.retain(keep);
            decks.prelude_cards.retain(keep);
        }

        tracing::debug!(
            modules = enabled.len(),
            projects = decks.project_cards.len(),
            corporations = decks.corporation_cards.len(),
            preludes = decks.prelude_cards.len(),
            removed = removed.len(),
            "selected game decks"
        );
        decks
    }
}
