//! Card definitions - static card data.
//!
//! `CardDefinition` holds the printed properties of a card: its name,
//! type, cost, and tags. What the card *does* lives in the rules engine,
//! which looks cards up by `CardName`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier for a card definition: its printed name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardName(String);

impl CardName {
    /// Create a new card name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for CardName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CardName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for CardName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Card frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    /// Green project card.
    Automated,
    /// Blue project card with an ongoing effect or action.
    Active,
    /// Red project card, played face down afterwards.
    Event,
    Corporation,
    Prelude,
}

impl CardType {
    /// Check if this type belongs in the project deck.
    #[must_use]
    pub const fn is_project(self) -> bool {
        matches!(self, CardType::Automated | CardType::Active | CardType::Event)
    }
}

/// Printed tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Building,
    Space,
    Science,
    Energy,
    Earth,
    Jovian,
    Venus,
    Plant,
    Microbe,
    Animal,
    City,
    Event,
    Wild,
}

/// Tags fit inline for every printed card (at most three in practice).
pub type Tags = SmallVec<[Tag; 3]>;

/// Static card definition.
///
/// ## Example
///
/// ```
/// use tfm_catalog::cards::{CardDefinition, CardType, Tag};
///
/// let camp = CardDefinition::project("Colonizer Training Camp", CardType::Automated, 8)
///     .with_tags(&[Tag::Jovian, Tag::Building]);
///
/// assert_eq!(camp.cost, Some(8));
/// assert!(camp.has_tag(Tag::Jovian));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Printed name, unique across the game.
    pub name: CardName,

    pub card_type: CardType,

    /// Megacredit cost. `None` for corporations and preludes.
    pub cost: Option<u32>,

    pub tags: Tags,
}

impl CardDefinition {
    /// Create a project card.
    ///
    /// `card_type` should be one of the project frames; see `CardType::is_project`.
    #[must_use]
    pub fn project(name: impl Into<String>, card_type: CardType, cost: u32) -> Self {
        debug_assert!(card_type.is_project(), "{card_type:?} is not a project frame");
        Self {
            name: CardName::new(name),
            card_type,
            cost: Some(cost),
            tags: Tags::new(),
        }
    }

    /// Create a corporation card.
    #[must_use]
    pub fn corporation(name: impl Into<String>) -> Self {
        Self {
            name: CardName::new(name),
            card_type: CardType::Corporation,
            cost: None,
            tags: Tags::new(),
        }
    }

    /// Create a prelude card.
    #[must_use]
    pub fn prelude(name: impl Into<String>) -> Self {
        Self {
            name: CardName::new(name),
            card_type: CardType::Prelude,
            cost: None,
            tags: Tags::new(),
        }
    }

    /// Set the printed tags (builder pattern).
    #[must_use]
    pub fn with_tags(mut self, tags: &[Tag]) -> Self {
        self.tags = Tags::from_slice(tags);
        self
    }

    #[must_use]
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
}
