//! Per-expansion card manifests.
//!
//! Each expansion ships a `CardManifest`: its project cards, corporations,
//! and preludes, plus the names of cards from other expansions that it
//! replaces when enabled.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::deck::Deck;
use super::definition::{CardDefinition, CardName};
use crate::core::{CatalogError, GameModule};

/// Card lists contributed by one expansion.
///
/// ## Example
///
/// ```
/// use tfm_catalog::cards::{CardDefinition, CardManifest, CardType};
/// use tfm_catalog::core::GameModule;
///
/// let manifest = CardManifest::new(GameModule::Promo)
///     .with_project_card(CardDefinition::project("Small Asteroid", CardType::Event, 10))
///     .with_corporation(CardDefinition::corporation("Splice"));
///
/// assert_eq!(manifest.card_count(), 2);
/// assert!(manifest.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardManifest {
    pub module: GameModule,
    pub project_cards: Deck,
    pub corporation_cards: Deck,
    pub prelude_cards: Deck,

    /// Cards from other manifests that leave the game when this module is on.
    #[serde(default)]
    pub cards_to_remove: Vec<CardName>,
}

impl CardManifest {
    /// Create an empty manifest for a module.
    #[must_use]
    pub fn new(module: GameModule) -> Self {
        Self {
            module,
            project_cards: Deck::new(),
            corporation_cards: Deck::new(),
            prelude_cards: Deck::new(),
            cards_to_remove: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_project_card(mut self, card: CardDefinition) -> Self {
        self.project_cards = self.project_cards.with_card(card);
        self
    }

    #[must_use]
    pub fn with_corporation(mut self, card: CardDefinition) -> Self {
        self.corporation_cards = self.corporation_cards.with_card(card);
        self
    }

    #[must_use]
    pub fn with_prelude(mut self, card: CardDefinition) -> Self {
        self.prelude_cards = self.prelude_cards.with_card(card);
        self
    }

    /// Mark a card from another manifest as replaced by this one.
    #[must_use]
    pub fn removing(mut self, name: impl Into<String>) -> Self {
        self.cards_to_remove.push(CardName::new(name));
        self
    }

    /// Total number of cards across the three categories.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.project_cards.len() + self.corporation_cards.len() + self.prelude_cards.len()
    }

    /// Iterate over every card: projects, then corporations, then preludes.
    pub fn all_cards(&self) -> impl Iterator<Item = &CardDefinition> {
        self.project_cards
            .iter()
            .chain(self.corporation_cards.iter())
            .chain(self.prelude_cards.iter())
    }

    /// Find a card in any category.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&CardDefinition> {
        self.all_cards().find(|c| c.name == name)
    }

    /// Check that no card name appears twice in this manifest.
    ///
    /// Reports the first duplicate in iteration order.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = FxHashSet::default();
        for card in self.all_cards() {
            if !seen.insert(card.name.as_str()) {
                tracing::warn!(module = %self.module, card = %card.name, "duplicate card in manifest");
                return Err(CatalogError::DuplicateCard {
                    module: self.module,
                    name: card.name.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;

    fn manifest() -> CardManifest {
        CardManifest::new(GameModule::Venus)
            .with_project_card(CardDefinition::project("Aerial Mappers", CardType::Active, 11))
            .with_project_card(CardDefinition::project("Dawn City", CardType::Automated, 15))
            .with_corporation(CardDefinition::corporation("Aphrodite"))
    }

    #[test]
    fn test_builder_fills_categories() {
        let m = manifest();
        assert_eq!(m.module, GameModule::Venus);
        assert_eq!(m.project_cards.len(), 2);
        assert_eq!(m.corporation_cards.len(), 1);
        assert!(m.prelude_cards.is_empty());
        assert_eq!(m.card_count(), 3);
    }

    #[test]
    fn test_all_cards_order() {
        let names: Vec<_> = manifest().all_cards().map(|c| c.name.to_string()).collect();
        assert_eq!(names, vec!["Aerial Mappers", "Dawn City", "Aphrodite"]);
    }

    #[test]
    fn test_find_by_name_across_categories() {
        let m = manifest();
        assert_eq!(
            m.find_by_name("Aphrodite").map(|c| c.card_type),
            Some(CardType::Corporation)
        );
        assert!(m.find_by_name("Comet").is_none());
    }

    #[test]
    fn test_validate_accepts_unique_names() {
        assert_eq!(manifest().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_duplicates_across_categories() {
        let m = manifest().with_prelude(CardDefinition::prelude("Dawn City"));
        assert_eq!(
            m.validate(),
            Err(CatalogError::DuplicateCard {
                module: GameModule::Venus,
                name: "Dawn City".to_string(),
            })
        );
    }

    #[test]
    fn test_removing() {
        let m = CardManifest::new(GameModule::Turmoil).removing("Comet");
        assert_eq!(m.cards_to_remove, vec![CardName::new("Comet")]);
    }

    #[test]
    fn test_manifest_json_field_names() {
        let json = serde_json::to_string(&manifest()).unwrap();
        assert!(json.contains("\"projectCards\""));
        assert!(json.contains("\"corporationCards\""));
        assert!(json.contains("\"module\":\"venus\""));

        let back: CardManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, manifest());
    }
}
