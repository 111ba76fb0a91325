use crate::cards::{CardDefinition, CardManifest, CardType, Tag};
use crate::core::GameModule;

pub(super) fn manifest() -> CardManifest {
    use CardType::{Active, Automated, Event};

    CardManifest::new(GameModule::Venus)
        .with_project_card(CardDefinition::project("Aerial Mappers", Active, 11).with_tags(&[Tag::Venus]))
        .with_project_card(CardDefinition::project("Venusian Animals", Active, 15).with_tags(&[Tag::Venus, Tag::Animal, Tag::Science]))
        .with_project_card(CardDefinition::project("Dawn City", Automated, 15).with_tags(&[Tag::City, Tag::Space]))
        .with_project_card(CardDefinition::project("Atmoscoop", Automated, 22).with_tags(&[Tag::Jovian, Tag::Space]))
        .with_project_card(CardDefinition::project("Comet for Venus", Event, 11).with_tags(&[Tag::Space, Tag::Event]))
        .with_corporation(CardDefinition::corporation("Aphrodite").with_tags(&[Tag::Plant, Tag::Venus]))
        .with_corporation(CardDefinition::corporation("Celestic").with_tags(&[Tag::Venus]))
        .with_corporation(CardDefinition::corporation("Manutech").with_tags(&[Tag::Building]))
        .with_corporation(CardDefinition::corporation("Morning Star Inc.").with_tags(&[Tag::Venus]))
        .with_corporation(CardDefinition::corporation("Viron").with_tags(&[Tag::Microbe]))
}
