use crate::cards::{CardDefinition, CardManifest, CardType, Tag};
use crate::core::GameModule;

pub(super) fn manifest() -> CardManifest {
    use CardType::{Active, Automated};

    CardManifest::new(GameModule::Colonies)
        .with_project_card(CardDefinition::project("Airliners", Automated, 11))
        .with_project_card(CardDefinition::project("Cryo-Sleep", Active, 10).with_tags(&[Tag::Science]))
        .with_project_card(CardDefinition::project("Trade Envoys", Active, 6))
        .with_project_card(CardDefinition::project("Space Port", Automated, 22).with_tags(&[Tag::City, Tag::Building]))
        .with_project_card(CardDefinition::project("Titan Shuttles", Active, 23).with_tags(&[Tag::Jovian, Tag::Space]))
        .with_corporation(CardDefinition::corporation("Aridor"))
        .with_corporation(CardDefinition::corporation("Arklight").with_tags(&[Tag::Animal]))
        .with_corporation(CardDefinition::corporation("Polyphemos"))
        .with_corporation(CardDefinition::corporation("Poseidon"))
        .with_corporation(CardDefinition::corporation("Stormcraft Incorporated").with_tags(&[Tag::Jovian]))
}
