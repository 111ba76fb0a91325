//! Game configuration types.
//!
//! A game chooses its expansions at setup time through `GameOptions`.
//! The base game is always in play; every other `GameModule` is opt-in.
//!
//! The catalog never hardcodes which expansions a table plays with. It
//! reads `GameOptions` and selects the matching manifests.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// An expansion (or the base game) that contributes cards.
///
/// Variants are declared in release order, which is also the order
/// manifests appear in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameModule {
    Base,
    CorpEra,
    Promo,
    Venus,
    Colonies,
    Prelude,
    Turmoil,
}

impl GameModule {
    /// Every module in catalog order.
    pub const ALL: [GameModule; 7] = [
        GameModule::Base,
        GameModule::CorpEra,
        GameModule::Promo,
        GameModule::Venus,
        GameModule::Colonies,
        GameModule::Prelude,
        GameModule::Turmoil,
    ];

    /// Lowercase id used in lobby settings and serialized data.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            GameModule::Base => "base",
            GameModule::CorpEra => "corpera",
            GameModule::Promo => "promo",
            GameModule::Venus => "venus",
            GameModule::Colonies => "colonies",
            GameModule::Prelude => "prelude",
            GameModule::Turmoil => "turmoil",
        }
    }
}

impl std::fmt::Display for GameModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for GameModule {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameModule::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| CatalogError::UnknownModule(s.to_string()))
    }
}

/// Expansion selection for a single game.
///
/// ## Example
///
/// ```
/// use tfm_catalog::core::{GameModule, GameOptions};
///
/// let options = GameOptions::default().with_module(GameModule::Venus, true);
/// let modules: Vec<_> = options.enabled_modules().collect();
///
/// assert_eq!(modules, vec![GameModule::Base, GameModule::CorpEra, GameModule::Venus]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameOptions {
    /// Corporate era project cards and corporations.
    pub corporate_era: bool,
    /// Promo cards.
    pub promo_cards: bool,
    /// Venus Next.
    pub venus_next: bool,
    /// Colonies.
    pub colonies: bool,
    /// Prelude.
    pub prelude: bool,
    /// Turmoil.
    pub turmoil: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            corporate_era: true,
            promo_cards: false,
            venus_next: false,
            colonies: false,
            prelude: false,
            turmoil: false,
        }
    }
}

impl GameOptions {
    /// Options with only the base game enabled.
    #[must_use]
    pub fn base_only() -> Self {
        Self {
            corporate_era: false,
            ..Self::default()
        }
    }

    /// Options with every expansion enabled.
    #[must_use]
    pub fn all_expansions() -> Self {
        GameModule::ALL
            .into_iter()
            .fold(Self::base_only(), |opts, m| opts.with_module(m, true))
    }

    /// Enable or disable a module (builder pattern).
    ///
    /// The base game cannot be disabled; `GameModule::Base` is ignored.
    #[must_use]
    pub fn with_module(mut self, module: GameModule, enabled: bool) -> Self {
        match module {
            GameModule::Base => {}
            GameModule::CorpEra => self.corporate_era = enabled,
            GameModule::Promo => self.promo_cards = enabled,
            GameModule::Venus => self.venus_next = enabled,
            GameModule::Colonies => self.colonies = enabled,
            GameModule::Prelude => self.prelude = enabled,
            GameModule::Turmoil => self.turmoil = enabled,
        }
        self
    }

    /// Check whether a module is in play.
    #[must_use]
    pub fn is_enabled(&self, module: GameModule) -> bool {
        match module {
            GameModule::Base => true,
            GameModule::CorpEra => self.corporate_era,
            GameModule::Promo => self.promo_cards,
            GameModule::Venus => self.venus_next,
            GameModule::Colonies => self.colonies,
            GameModule::Prelude => self.prelude,
            GameModule::Turmoil => self.turmoil,
        }
    }

    /// Enabled modules in catalog order. Always starts with `Base`.
    pub fn enabled_modules(&self) -> impl Iterator<Item = GameModule> + '_ {
        GameModule::ALL.into_iter().filter(move |m| self.is_enabled(*m))
    }
}
