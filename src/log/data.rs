//! Typed substitution values for log text.

use serde::{Deserialize, Serialize};

use crate::cards::CardName;
use crate::core::PlayerId;

/// What a `LogMessageData` value refers to.
///
/// Viewers use this to pick rendering: a `Player` value becomes a
/// colored player name, a `Card` value a card link, and so on.
/// `RawString` is shown verbatim; `String` may be translated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogMessageDataType {
    String,
    RawString,
    Player,
    Card,
    Award,
    Milestone,
    Colony,
    StandardProject,
    Party,
    TileType,
    SpaceBonus,
    Global,
}

/// One substitution value for a `${N}` placeholder.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogMessageData {
    pub data_type: LogMessageDataType,
    pub value: String,
}

impl LogMessageData {
    #[must_use]
    pub fn new(data_type: LogMessageDataType, value: impl Into<String>) -> Self {
        Self {
            data_type,
            value: value.into(),
        }
    }

    /// Translatable text.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::new(LogMessageDataType::String, value)
    }

    /// Text shown exactly as given (numbers, user input).
    #[must_use]
    pub fn raw_string(value: impl Into<String>) -> Self {
        Self::new(LogMessageDataType::RawString, value)
    }

    #[must_use]
    pub fn player(player: &PlayerId) -> Self {
        Self::new(LogMessageDataType::Player, player.as_str())
    }

    #[must_use]
    pub fn card(name: &CardName) -> Self {
        Self::new(LogMessageDataType::Card, name.as_str())
    }
}
