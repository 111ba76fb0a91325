use crate::cards::{CardDefinition, CardManifest, CardType, Tag};
use crate::core::GameModule;

pub(super) fn manifest() -> CardManifest {
    use CardType::{Active, Automated, Event};

    CardManifest::new(GameModule::CorpEra)
        .with_project_card(CardDefinition::project("Acquired Company", Automated, 10).with_tags(&[Tag::Earth]))
        .with_project_card(CardDefinition::project("Business Network", Active, 4).with_tags(&[Tag::Earth]))
        .with_project_card(CardDefinition::project("Research", Automated, 11).with_tags(&[Tag::Science, Tag::Science]))
        .with_project_card(CardDefinition::project("Mine", Automated, 4).with_tags(&[Tag::Building]))
        .with_project_card(CardDefinition::project("Earth Office", Active, 1).with_tags(&[Tag::Earth]))
        .with_project_card(CardDefinition::project("Business Contacts", Event, 7).with_tags(&[Tag::Earth, Tag::Event]))
        .with_corporation(CardDefinition::corporation("Saturn Systems").with_tags(&[Tag::Jovian]))
        .with_corporation(CardDefinition::corporation("Teractor").with_tags(&[Tag::Earth]))
}
