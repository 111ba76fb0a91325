//! The log entry value type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::clock;
use super::data::LogMessageData;
use crate::core::PlayerId;

/// Log entry category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogMessageType {
    /// Ordinary game event.
    #[default]
    Default,
    /// Marks the start of a new generation; viewers draw a separator.
    NewGeneration,
}

/// An immutable record of one game event.
///
/// Fields are read-only once constructed. `LogEntry` does
/// not implement `PartialEq`: two entries built from the same arguments
/// are still two events. Use `same_content` to compare payloads.
///
/// ## Example
///
/// ```
/// use tfm_catalog::cards::CardName;
/// use tfm_catalog::core::PlayerId;
/// use tfm_catalog::log::{LogEntry, LogMessageData, LogMessageType};
///
/// let player = PlayerId::new("player-1");
/// let entry = LogEntry::new(
///     LogMessageType::Default,
///     "${0} played ${1}",
///     vec![LogMessageData::player(&player), LogMessageData::card(&CardName::new("Comet"))],
///     Some(player.clone()),
/// );
///
/// assert_eq!(entry.actor(), Some(&player));
/// assert_eq!(entry.render(), "player-1 played Comet");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    kind: LogMessageType,
    text: String,
    data: Vec<LogMessageData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    actor: Option<PlayerId>,
    created_at: DateTime<Utc>,
}

impl LogEntry {
    /// Record an event now.
    ///
    /// Accepts any text and data; reads the clock once.
    #[must_use]
    pub fn new(
        kind: LogMessageType,
        text: impl Into<String>,
        data: Vec<LogMessageData>,
        actor: Option<PlayerId>,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            data,
            actor,
            created_at: clock::now(),
        }
    }

    /// Record an event with no acting player.
    #[must_use]
    pub fn system(kind: LogMessageType, text: impl Into<String>, data: Vec<LogMessageData>) -> Self {
        Self::new(kind, text, data, None)
    }

    #[must_use]
    pub fn kind(&self) -> LogMessageType {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn data(&self) -> &[LogMessageData] {
        &self.data
    }

    /// The player who caused the event, if any.
    #[must_use]
    pub fn actor(&self) -> Option<&PlayerId> {
        self.actor.as_ref()
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Compare everything except the creation time.
    #[must_use]
    pub fn same_content(&self, other: &LogEntry) -> bool {
        self.kind == other.kind
            && self.text == other.text
            && self.data == other.data
            && self.actor == other.actor
    }

    /// Substitute `${N}` placeholders with `data[N].value`.
    ///
    /// Placeholders with no matching datum, or a non-numeric index, are
    /// left as written.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text.as_str();

        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let resolved = after.find('}').and_then(|end| {
                let index: usize = after[..end].parse().ok()?;
                self.data.get(index).map(|datum| (end, datum))
            });

            match resolved {
                Some((end, datum)) => {
                    out.push_str(&datum.value);
                    rest = &after[end + 1..];
                }
                None => {
                    out.push_str("${");
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str, data: Vec<LogMessageData>) -> LogEntry {
        LogEntry::system(LogMessageType::Default, text, data)
    }

    #[test]
    fn test_render_in_order() {
        let e = entry(
            "${0} gained ${1} plants",
            vec![LogMessageData::raw_string("Blue"), LogMessageData::raw_string("3")],
        );
        assert_eq!(e.render(), "Blue gained 3 plants");
    }

    #[test]
    fn test_render_repeated_and_reordered() {
        let e = entry(
            "${1} before ${0}, ${1} again",
            vec![LogMessageData::string("a"), LogMessageData::string("b")],
        );
        assert_eq!(e.render(), "b before a, b again");
    }

    #[test]
    fn test_render_leaves_unresolved_placeholders() {
        let e = entry("${0} and ${5} and ${x} and ${", vec![LogMessageData::string("ok")]);
        assert_eq!(e.render(), "ok and ${5} and ${x} and ${");
    }

    #[test]
    fn test_render_plain_text() {
        assert_eq!(entry("Generation 3", Vec::new()).render(), "Generation 3");
    }

    #[test]
    fn test_system_entry_has_no_actor() {
        let e = entry("Final greenery placement", Vec::new());
        assert!(e.actor().is_none());
        assert_eq!(e.kind(), LogMessageType::Default);
    }

    #[test]
    fn test_same_content_ignores_timestamp() {
        let a = LogEntry::new(LogMessageType::NewGeneration, "Generation ${0}", vec![LogMessageData::raw_string("2")], None);
        let b = LogEntry::new(LogMessageType::NewGeneration, "Generation ${0}", vec![LogMessageData::raw_string("2")], None);
        let c = LogEntry::new(LogMessageType::NewGeneration, "Generation ${0}", vec![LogMessageData::raw_string("3")], None);

        assert!(a.same_content(&b));
        assert!(!a.same_content(&c));
        assert!(b.created_at() >= a.created_at());
    }

    #[test]
    fn test_actor_omitted_from_json_when_absent() {
        let json = serde_json::to_string(&entry("x", Vec::new())).unwrap();
        assert!(!json.contains("actor"));
        assert!(json.contains("\"createdAt\""));
    }
}
