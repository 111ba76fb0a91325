use crate::cards::{CardDefinition, CardManifest, CardType, Tag};
use crate::core::GameModule;

pub(super) fn manifest() -> CardManifest {
    use CardType::{Active, Automated, Event};

    CardManifest::new(GameModule::Base)
        .with_project_card(CardDefinition::project("Colonizer Training Camp", Automated, 8).with_tags(&[Tag::Jovian, Tag::Building]))
        .with_project_card(CardDefinition::project("Asteroid Mining Consortium", Automated, 13).with_tags(&[Tag::Jovian]))
        .with_project_card(CardDefinition::project("Deep Well Heating", Automated, 13).with_tags(&[Tag::Energy, Tag::Building]))
        .with_project_card(CardDefinition::project("Cloud Seeding", Automated, 11))
        .with_project_card(CardDefinition::project("Search For Life", Active, 3).with_tags(&[Tag::Science]))
        .with_project_card(CardDefinition::project("Inventors' Guild", Active, 9).with_tags(&[Tag::Science]))
        .with_project_card(CardDefinition::project("Martian Rails", Active, 13).with_tags(&[Tag::Building]))
        .with_project_card(CardDefinition::project("Capital", Automated, 26).with_tags(&[Tag::City, Tag::Building]))
        .with_project_card(CardDefinition::project("Asteroid", Event, 14).with_tags(&[Tag::Space, Tag::Event]))
        .with_project_card(CardDefinition::project("Comet", Event, 21).with_tags(&[Tag::Space, Tag::Event]))
        .with_project_card(CardDefinition::project("Lichen", Automated, 7).with_tags(&[Tag::Plant]))
        .with_project_card(CardDefinition::project("Birds", Active, 10).with_tags(&[Tag::Animal]))
        .with_corporation(CardDefinition::corporation("Beginner Corporation"))
        .with_corporation(CardDefinition::corporation("CrediCor"))
        .with_corporation(CardDefinition::corporation("Ecoline").with_tags(&[Tag::Plant]))
        .with_corporation(CardDefinition::corporation("Helion").with_tags(&[Tag::Space]))
        .with_corporation(CardDefinition::corporation("Mining Guild").with_tags(&[Tag::Building, Tag::Building]))
        .with_corporation(CardDefinition::corporation("Interplanetary Cinematics").with_tags(&[Tag::Building]))
        .with_corporation(CardDefinition::corporation("Inventrix").with_tags(&[Tag::Science]))
        .with_corporation(CardDefinition::corporation("PhoboLog").with_tags(&[Tag::Space]))
        .with_corporation(CardDefinition::corporation("Tharsis Republic").with_tags(&[Tag::Building]))
        .with_corporation(CardDefinition::corporation("Thorgate").with_tags(&[Tag::Energy]))
        .with_corporation(CardDefinition::corporation("United Nations Mars Initiative").with_tags(&[Tag::Earth]))
}
