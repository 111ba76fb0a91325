//! Monotonic timestamp source for log entries.
//!
//! Wall-clock time can step backwards (NTP adjustments, VM migration).
//! Log entries must never be stamped earlier than an entry created
//! before them, so the last issued instant is kept in an atomic and each
//! new stamp is clamped to it.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// Last issued stamp, in microseconds since the Unix epoch.
static LAST_MICROS: AtomicI64 = AtomicI64::new(i64::MIN);

/// Current time, never earlier than any previously returned value.
///
/// Precision is one microsecond.
pub(crate) fn now() -> DateTime<Utc> {
    let wall = Utc::now();
    let micros = wall.timestamp_micros();
    let prev = LAST_MICROS.fetch_max(micros, Ordering::AcqRel);

    DateTime::from_timestamp_micros(prev.max(micros)).unwrap_or(wall)
}
