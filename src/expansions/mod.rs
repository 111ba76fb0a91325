//! Built-in card manifests, one module per expansion.
//!
//! `manifests()` returns them in release order, which is the order the
//! catalog publishes. Each expansion appears exactly once.

mod base;
mod colonies;
mod corp_era;
mod prelude;
mod promo;
mod turmoil;
mod venus;

use crate::cards::CardManifest;
use crate::core::GameModule;

/// Manifest for a single module.
#[must_use]
pub fn manifest(module: GameModule) -> CardManifest {
    match module {
        GameModule::Base => base::manifest(),
        GameModule::CorpEra => corp_era::manifest(),
        GameModule::Promo => promo::manifest(),
        GameModule::Venus => venus::manifest(),
        GameModule::Colonies => colonies::manifest(),
        GameModule::Prelude => prelude::manifest(),
        GameModule::Turmoil => turmoil::manifest(),
    }
}

/// Every built-in manifest in catalog order.
#[must_use]
pub fn manifests() -> Vec<CardManifest> {
    GameModule::ALL.into_iter().map(manifest).collect()
}
