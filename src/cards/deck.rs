//! Ordered card lists.
//!
//! A `Deck` is an ordered sequence of card definitions backed by a
//! persistent vector, so cloning a deck out of a manifest is O(1) and
//! shares storage with the original.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardName};

/// Ordered list of card definitions.
///
/// ## Example
///
/// ```
/// use tfm_catalog::cards::{CardDefinition, CardType, Deck};
///
/// let deck = Deck::from(vec![
///     CardDefinition::project("Comet", CardType::Event, 21),
///     CardDefinition::project("Asteroid", CardType::Event, 14),
/// ]);
///
/// assert_eq!(deck.len(), 2);
/// assert_eq!(deck.find_by_name("Asteroid").and_then(|c| c.cost), Some(14));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vector<CardDefinition>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `index`, in deck order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CardDefinition> {
        self.cards.get(index)
    }

    /// Iterate over cards in order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    /// Iterate over card names in order.
    pub fn names(&self) -> impl Iterator<Item = &CardName> {
        self.cards.iter().map(|c| &c.name)
    }

    /// Find a card by name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&CardDefinition> {
        self.cards.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Append a card (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card: CardDefinition) -> Self {
        self.cards.push_back(card);
        self
    }

    /// Append every card of `other`, keeping order.
    pub fn append(&mut self, other: &Deck) {
        self.cards.append(other.cards.clone());
    }

    /// Keep only the cards matching `keep`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&CardDefinition) -> bool,
    {
        self.cards.retain(|c| keep(c));
    }
}

impl From<Vec<CardDefinition>> for Deck {
    fn from(cards: Vec<CardDefinition>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }
}

impl FromIterator<CardDefinition> for Deck {
    fn from_iter<I: IntoIterator<Item = CardDefinition>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a CardDefinition;
    type IntoIter = im::vector::Iter<'a, CardDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;

    fn sample() -> Deck {
        Deck::from(vec![
            CardDefinition::project("Search For Life", CardType::Active, 3),
            CardDefinition::project("Inventors' Guild", CardType::Active, 9),
            CardDefinition::project("Martian Rails", CardType::Active, 13),
        ])
    }

    #[test]
    fn test_order_preserved() {
        let names: Vec<_> = sample().names().map(|n| n.as_str().to_string()).collect();
        assert_eq!(names, vec!["Search For Life", "Inventors' Guild", "Martian Rails"]);
    }

    #[test]
    fn test_find_by_name() {
        let deck = sample();
        assert_eq!(deck.find_by_name("Martian Rails").map(|c| c.cost), Some(Some(13)));
        assert!(deck.find_by_name("Comet").is_none());
        assert!(deck.contains("Inventors' Guild"));
    }

    #[test]
    fn test_clone_is_equal() {
        let deck = sample();
        let copy = deck.clone();
        assert_eq!(deck, copy);
        assert_eq!(copy.len(), 3);
    }

    #[test]
    fn test_append_and_retain() {
        let mut deck = sample();
        deck.append(&Deck::new().with_card(CardDefinition::project("Comet", CardType::Event, 21)));
        assert_eq!(deck.len(), 4);
        assert_eq!(deck.get(3).map(|c| c.name.as_str()), Some("Comet"));

        deck.retain(|c| c.card_type == CardType::Active);
        assert_eq!(deck.len(), 3);
        assert!(!deck.contains("Comet"));
    }

    #[test]
    fn test_empty() {
        let deck = Deck::new();
        assert!(deck.is_empty());
        assert_eq!(deck.iter().count(), 0);
    }

    #[test]
    fn test_deck_serializes_as_list() {
        let deck = Deck::new().with_card(CardDefinition::prelude("Donation"));
        let json = serde_json::to_string(&deck).unwrap();
        assert!(json.starts_with('['));

        let back: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(back, deck);
    }
}
