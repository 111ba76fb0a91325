use crate::cards::{CardDefinition, CardManifest, CardType, Tag};
use crate::core::GameModule;

pub(super) fn manifest() -> CardManifest {
    use CardType::{Active, Automated, Event};

    CardManifest::new(GameModule::Promo)
        .with_project_card(CardDefinition::project("Self-Replicating Robots", Active, 7))
        .with_project_card(CardDefinition::project("Mercurian Alloys", Active, 3).with_tags(&[Tag::Space]))
        .with_project_card(CardDefinition::project("Orbital Cleanup", Active, 14).with_tags(&[Tag::Earth, Tag::Space]))
        .with_project_card(CardDefinition::project("Small Asteroid", Event, 10).with_tags(&[Tag::Space, Tag::Event]))
        .with_project_card(CardDefinition::project("Snow Algae", Automated, 12).with_tags(&[Tag::Plant]))
        .with_project_card(CardDefinition::project("Penguins", Active, 7).with_tags(&[Tag::Animal]))
        .with_corporation(CardDefinition::corporation("Arcadian Communities"))
        .with_corporation(CardDefinition::corporation("Recyclon").with_tags(&[Tag::Microbe, Tag::Building]))
        .with_corporation(CardDefinition::corporation("Splice").with_tags(&[Tag::Microbe]))
}
