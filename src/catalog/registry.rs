//! Card catalog built from the expansion manifests.
//!
//! The catalog keeps the manifests in their published order and derives
//! three deck collections from them, one per card category. Each derived
//! collection is a per-index projection: `project_decks()[i]` is the
//! project deck of `manifests()[i]`. Nothing is merged, flattened,
//! deduplicated, or shuffled here.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::cards::{CardDefinition, CardManifest, CardName, Deck};
use crate::core::GameModule;
use crate::expansions;

/// Read-only registry of every card manifest.
///
/// ## Example
///
/// ```
/// use tfm_catalog::catalog::CardCatalog;
///
/// let catalog = CardCatalog::global();
///
/// assert_eq!(catalog.project_decks().len(), catalog.manifests().len());
/// assert!(catalog.find_by_name("Comet").is_some());
/// ```
#[derive(Clone, Debug)]
pub struct CardCatalog {
    manifests: Vec<CardManifest>,
    project_decks: Vec<Deck>,
    corporation_decks: Vec<Deck>,
    prelude_decks: Vec<Deck>,
}

impl CardCatalog {
    /// Build a catalog from manifests, keeping their order.
    #[must_use]
    pub fn new(manifests: Vec<CardManifest>) -> Self {
        let project_decks = manifests.iter().map(|m| m.project_cards.clone()).collect();
        let corporation_decks = manifests.iter().map(|m| m.corporation_cards.clone()).collect();
        let prelude_decks = manifests.iter().map(|m| m.prelude_cards.clone()).collect();

        Self {
            manifests,
            project_decks,
            corporation_decks,
            prelude_decks,
        }
    }

    /// Catalog of the built-in expansions, built on first use.
    pub fn global() -> &'static CardCatalog {
        static INSTANCE: OnceLock<CardCatalog> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let catalog = CardCatalog::new(expansions::manifests());
            tracing::debug!(
                manifests = catalog.manifests.len(),
                cards = catalog.card_count(),
                "built card catalog"
            );
            catalog
        })
    }

    /// Manifests in catalog order.
    #[must_use]
    pub fn manifests(&self) -> &[CardManifest] {
        &self.manifests
    }

    /// One project deck per manifest, in catalog order.
    #[must_use]
    pub fn project_decks(&self) -> &[Deck] {
        &self.project_decks
    }

    /// One corporation deck per manifest, in catalog order.
    #[must_use]
    pub fn corporation_decks(&self) -> &[Deck] {
        &self.corporation_decks
    }

    /// One prelude deck per manifest, in catalog order.
    #[must_use]
    pub fn prelude_decks(&self) -> &[Deck] {
        &self.prelude_decks
    }

    /// First manifest belonging to `module`.
    #[must_use]
    pub fn manifest(&self, module: GameModule) -> Option<&CardManifest> {
        self.manifests.iter().find(|m| m.module == module)
    }

    /// First card with this name, searching manifests in catalog order.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&CardDefinition> {
        self.manifests.iter().find_map(|m| m.find_by_name(name))
    }

    /// Total number of cards across all manifests.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.manifests.iter().map(CardManifest::card_count).sum()
    }

    /// Card names that appear in more than one manifest.
    ///
    /// Aggregation does not enforce cross-manifest uniqueness; this is a
    /// diagnostic for catalog authors. Names are returned sorted.
    #[must_use]
    pub fn duplicate_names(&self) -> Vec<CardName> {
        let mut owners: FxHashMap<&CardName, usize> = FxHashMap::default();
        for manifest in &self.manifests {
            for card in manifest.all_cards() {
                *owners.entry(&card.name).or_default() += 1;
            }
        }

        let mut dupes: Vec<CardName> = owners
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(name, _)| name.clone())
            .collect();
        dupes.sort();
        dupes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;

    fn project(name: &str) -> CardDefinition {
        CardDefinition::project(name, CardType::Automated, 1)
    }

    #[test]
    fn test_projection_does_not_flatten() {
        let a = CardManifest::new(GameModule::Base)
            .with_project_card(project("p1"))
            .with_project_card(project("p2"));
        let b = CardManifest::new(GameModule::Promo).with_project_card(project("p3"));

        let catalog = CardCatalog::new(vec![a.clone(), b.clone()]);

        assert_eq!(catalog.project_decks().len(), 2);
        assert_eq!(catalog.project_decks()[0], a.project_cards);
        assert_eq!(catalog.project_decks()[1], b.project_cards);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = CardCatalog::new(Vec::new());
        assert!(catalog.manifests().is_empty());
        assert!(catalog.project_decks().is_empty());
        assert!(catalog.corporation_decks().is_empty());
        assert!(catalog.prelude_decks().is_empty());
        assert_eq!(catalog.card_count(), 0);
    }

    #[test]
    fn test_manifest_lookup() {
        let catalog = CardCatalog::new(vec![
            CardManifest::new(GameModule::Base),
            CardManifest::new(GameModule::Venus).with_corporation(CardDefinition::corporation("Viron")),
        ]);

        assert!(catalog.manifest(GameModule::Venus).is_some());
        assert!(catalog.manifest(GameModule::Turmoil).is_none());
        assert_eq!(
            catalog.find_by_name("Viron").map(|c| c.card_type),
            Some(CardType::Corporation)
        );
    }

    #[test]
    fn test_find_by_name_prefers_earlier_manifest() {
        let catalog = CardCatalog::new(vec![
            CardManifest::new(GameModule::Base)
                .with_project_card(CardDefinition::project("Shared", CardType::Event, 5)),
            CardManifest::new(GameModule::Promo)
                .with_project_card(CardDefinition::project("Shared", CardType::Event, 9)),
        ]);

        assert_eq!(catalog.find_by_name("Shared").and_then(|c| c.cost), Some(5));
        assert_eq!(catalog.duplicate_names(), vec![CardName::new("Shared")]);
    }

    #[test]
    fn test_global_is_singleton() {
        let a = CardCatalog::global();
        let b = CardCatalog::global();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_global_has_no_cross_manifest_duplicates() {
        assert!(CardCatalog::global().duplicate_names().is_empty());
    }
}
