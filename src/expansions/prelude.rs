use crate::cards::{CardDefinition, CardManifest, CardType, Tag};
use crate::core::GameModule;

pub(super) fn manifest() -> CardManifest {
    use CardType::Automated;

    CardManifest::new(GameModule::Prelude)
        .with_project_card(CardDefinition::project("House Printing", Automated, 10).with_tags(&[Tag::Building]))
        .with_project_card(CardDefinition::project("Lava Tube Settlement", Automated, 15).with_tags(&[Tag::Building, Tag::City]))
        .with_project_card(CardDefinition::project("Psychrophiles", CardType::Active, 2).with_tags(&[Tag::Microbe]))
        .with_corporation(CardDefinition::corporation("Cheung Shing MARS").with_tags(&[Tag::Building]))
        .with_corporation(CardDefinition::corporation("Point Luna").with_tags(&[Tag::Space, Tag::Earth]))
        .with_corporation(CardDefinition::corporation("Robinson Industries"))
        .with_corporation(CardDefinition::corporation("Valley Trust").with_tags(&[Tag::Earth]))
        .with_corporation(CardDefinition::corporation("Vitor").with_tags(&[Tag::Earth]))
        .with_prelude(CardDefinition::prelude("Acquired Space Agency"))
        .with_prelude(CardDefinition::prelude("Allied Banks").with_tags(&[Tag::Earth]))
        .with_prelude(CardDefinition::prelude("Biofuels").with_tags(&[Tag::Microbe]))
        .with_prelude(CardDefinition::prelude("Donation"))
        .with_prelude(CardDefinition::prelude("Early Settlement").with_tags(&[Tag::Building, Tag::City]))
        .with_prelude(CardDefinition::prelude("Metals Company"))
        .with_prelude(CardDefinition::prelude("Supply Drop"))
}
