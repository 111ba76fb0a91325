use crate::cards::{CardDefinition, CardManifest, CardType, Tag};
use crate::core::GameModule;

pub(super) fn manifest() -> CardManifest {
    use CardType::{Active, Automated, Event};

    CardManifest::new(GameModule::Turmoil)
        .with_project_card(CardDefinition::project("Banned Delegate", Event, 0).with_tags(&[Tag::Event]))
        .with_project_card(CardDefinition::project("Cultural Metropolis", Automated, 20).with_tags(&[Tag::City, Tag::Building]))
        .with_project_card(CardDefinition::project("Diaspora Movement", Automated, 7).with_tags(&[Tag::Jovian]))
        .with_project_card(CardDefinition::project("Aerial Lenses", Automated, 2))
        .with_project_card(CardDefinition::project("Political Alliance", Automated, 4))
        .with_project_card(CardDefinition::project("Event Analysts", Active, 5).with_tags(&[Tag::Science]))
        .with_corporation(CardDefinition::corporation("Lakefront Resorts").with_tags(&[Tag::Building]))
        .with_corporation(CardDefinition::corporation("Pristar"))
        .with_corporation(CardDefinition::corporation("Septem Tribus"))
        .with_corporation(CardDefinition::corporation("Terralabs Research"))
        .with_corporation(CardDefinition::corporation("Utopia Invest").with_tags(&[Tag::Building]))
}
