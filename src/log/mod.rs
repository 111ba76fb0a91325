//! Game log entries.
//!
//! A `LogEntry` records one game event for later display. Entries are
//! immutable facts: built once, stamped with their creation time, and
//! appended to a per-game log owned by the caller.
//!
//! ## Text and Data
//!
//! `text` may contain `${N}` placeholders; `data[N]` supplies the value
//! for each one. Typed data lets a viewer render players, cards, and other
//! game objects with their own styling instead of plain text.

mod clock;
pub mod data;
pub mod entry;

pub use data::{LogMessageData, LogMessageDataType};
pub use entry::{LogEntry, LogMessageType};
