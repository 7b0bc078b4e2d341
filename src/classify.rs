//! Keyword/time classification of messages.
//!
//! The game: post the magic word at exactly the target minute. A message
//! is *correct* when it contains one of the accepted keyword spellings
//! and was sent at the target hour:minute. It is *incorrect* when it
//! contains a keyword (or the WhatsApp deleted-message notice, which
//! hides the evidence) at the target hour but one minute off.
//!
//! All text matching is case-insensitive substring matching.

use serde::{Deserialize, Serialize};

use crate::Message;

/// Accepted spellings of the magic word, from years of creative abuse.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "vo", "voo", "vooo", "voooo", "vooooo", "bvo", "bravo", "braveau", "veau",
];

/// WhatsApp notice left behind when a sender deletes a message.
/// Deleting a near-miss does not make it un-happen.
pub const DELETED_MARKER: &str = "Dit bericht is verwijderd";

/// Outcome of classifying one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Keyword at exactly the target minute.
    Correct,
    /// Keyword or deleted-message notice at an adjacent minute.
    Incorrect,
    /// Everything else.
    Neither,
}

/// The rule set that decides verdicts.
///
/// Defaults reproduce the group's game: keywords from
/// [`DEFAULT_KEYWORDS`], target 12:13, adjacent minutes 12:12 and 12:14.
///
/// # Example
///
/// ```
/// use vostats::classify::GameRules;
///
/// // A different group plays at 11:11 with "elf"
/// let rules = GameRules::new()
///     .with_keywords(["elf"])
///     .with_target(11, 11);
/// assert_eq!(rules.near_minutes(), &[10, 12]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRules {
    keywords: Vec<String>,
    hour: u32,
    minute: u32,
    near_minutes: Vec<u32>,
    deleted_marker: String,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_lowercase()).collect(),
            hour: 12,
            minute: 13,
            near_minutes: vec![12, 14],
            deleted_marker: DELETED_MARKER.to_lowercase(),
        }
    }
}

impl GameRules {
    /// Creates the default rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the keyword list. Keywords are matched case-insensitively.
    ///
    /// An empty iterator is ignored and keeps the current list; a game
    /// without keywords scores nothing.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lowered: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        if !lowered.is_empty() {
            self.keywords = lowered;
        }
        self
    }

    /// Sets the target time and re-derives the adjacent minutes as one
    /// minute either side (clamped to the same hour).
    #[must_use]
    pub fn with_target(mut self, hour: u32, minute: u32) -> Self {
        self.hour = hour.min(23);
        self.minute = minute.min(59);
        self.near_minutes = Vec::new();
        if self.minute > 0 {
            self.near_minutes.push(self.minute - 1);
        }
        if self.minute < 59 {
            self.near_minutes.push(self.minute + 1);
        }
        self
    }

    /// Overrides the adjacent minutes explicitly.
    #[must_use]
    pub fn with_near_minutes(mut self, minutes: impl Into<Vec<u32>>) -> Self {
        self.near_minutes = minutes.into();
        self
    }

    /// The keyword list (lowercased).
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// The shortest keyword, used in chart captions.
    pub fn primary_keyword(&self) -> &str {
        self.keywords
            .iter()
            .min_by_key(|k| k.len())
            .map_or("vo", String::as_str)
    }

    /// Target hour (0-23).
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Target minute (0-59).
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Minutes (within the target hour) that count as a near miss.
    pub fn near_minutes(&self) -> &[u32] {
        &self.near_minutes
    }

    /// Classifies one message.
    ///
    /// Correct takes precedence over incorrect, should the adjacent
    /// minutes ever be configured to overlap the target.
    pub fn classify(&self, message: &Message) -> Verdict {
        if message.hour() != self.hour {
            return Verdict::Neither;
        }

        let content = message.content.to_lowercase();
        let has_keyword = self.keywords.iter().any(|k| content.contains(k.as_str()));

        if has_keyword && message.minute() == self.minute {
            return Verdict::Correct;
        }

        let is_deleted = content.contains(&self.deleted_marker);
        if (has_keyword || is_deleted) && self.near_minutes.contains(&message.minute()) {
            return Verdict::Incorrect;
        }

        Verdict::Neither
    }
}
