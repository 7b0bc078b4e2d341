//! The parsed message record.
//!
//! [`Message`] is what the export parser produces: one record per
//! well-formed line, holding the wall-clock timestamp, the sender name,
//! and the verbatim content. Classification flags are *not* stored here;
//! they are derived by [`crate::classify`] so the same records can be
//! scored under different rule sets.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// One message from the chat export.
///
/// Timestamps are naive: the export carries no timezone, and the game is
/// played against the wall clock of the group, so the hour/minute checks
/// must see exactly what was written in the file.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use vostats::Message;
///
/// let ts = NaiveDate::from_ymd_opt(2020, 3, 26)
///     .unwrap()
///     .and_hms_opt(12, 13, 0)
///     .unwrap();
/// let msg = Message::new(ts, "Alice", "vo");
/// assert_eq!(msg.year(), 2020);
/// assert_eq!(msg.sender, "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent, as written in the export.
    pub timestamp: NaiveDateTime,

    /// Display name of the message author.
    pub sender: String,

    /// Text content, verbatim (not lowercased, colons preserved).
    pub content: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            content: content.into(),
        }
    }

    /// Calendar year the message was sent in.
    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    /// Hour of day (0-23).
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Minute of hour (0-59).
    pub fn minute(&self) -> u32 {
        self.timestamp.minute()
    }

    /// Returns `true` if this message's content is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}
