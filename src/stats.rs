//! Aggregation: per-sender leaderboards and year-over-year change.
//!
//! Everything here is a counting pass over classified messages followed
//! by a sort. Leaderboards are sorted non-increasing by count; ties are
//! broken alphabetically by sender so output is deterministic run to run.

use std::collections::HashMap;

use crate::Message;
use crate::classify::{GameRules, Verdict};
use crate::error::{Result, VostatsError};

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderCount {
    /// Sender display name.
    pub sender: String,
    /// Number of messages in this bucket.
    pub count: u64,
}

/// Correct and incorrect leaderboards for one scope (a year, or all time).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    /// Senders by number of correct messages, non-increasing.
    pub correct: Vec<SenderCount>,
    /// Senders by number of incorrect messages, non-increasing.
    pub incorrect: Vec<SenderCount>,
}

impl Tally {
    /// Total number of correct messages in scope.
    pub fn correct_total(&self) -> u64 {
        self.correct.iter().map(|e| e.count).sum()
    }

    /// Total number of incorrect messages in scope.
    pub fn incorrect_total(&self) -> u64 {
        self.incorrect.iter().map(|e| e.count).sum()
    }

    /// Returns `true` when neither bucket has any entries.
    pub fn is_empty(&self) -> bool {
        self.correct.is_empty() && self.incorrect.is_empty()
    }
}

/// One row of the year-over-year comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct SenderChange {
    /// Sender display name.
    pub sender: String,
    /// Percent change in correct count between the two years.
    pub percent: f64,
}

/// Counts correct/incorrect messages per sender.
///
/// `year` limits the scope to one calendar year; `None` means all time.
/// A message counts as correct *or* incorrect, never both (correct wins).
///
/// # Example
///
/// ```
/// use vostats::classify::GameRules;
/// use vostats::parser::ExportParser;
/// use vostats::stats::tally;
///
/// let export = ExportParser::new()
///     .parse_str("26-03-2016 12:13 - Alice: vo\n26-03-2016 12:14 - Bob: vo")?;
/// let rules = GameRules::new();
///
/// let board = tally(&export.messages, &rules, Some(2016));
/// assert_eq!(board.correct[0].sender, "Alice");
/// assert_eq!(board.incorrect[0].sender, "Bob");
/// # Ok::<(), vostats::VostatsError>(())
/// ```
pub fn tally(messages: &[Message], rules: &GameRules, year: Option<i32>) -> Tally {
    let mut correct: HashMap<&str, u64> = HashMap::new();
    let mut incorrect: HashMap<&str, u64> = HashMap::new();

    for message in messages {
        if year.is_some_and(|y| message.year() != y) {
            continue;
        }

        match rules.classify(message) {
            Verdict::Correct => *correct.entry(message.sender.as_str()).or_default() += 1,
            Verdict::Incorrect => *incorrect.entry(message.sender.as_str()).or_default() += 1,
            Verdict::Neither => {}
        }
    }

    Tally {
        correct: into_leaderboard(correct),
        incorrect: into_leaderboard(incorrect),
    }
}

/// Per-sender percent change in *correct* count between two years.
///
/// Senders with no correct message in the base year are left out: there
/// is no meaningful baseline for them. Only senders active in the base
/// year appear at all; rows are sorted non-increasing by percent.
///
/// # Errors
///
/// Returns [`VostatsError::InvalidYearRange`] unless `base_year < later_year`.
pub fn percent_change(
    messages: &[Message],
    rules: &GameRules,
    base_year: i32,
    later_year: i32,
) -> Result<Vec<SenderChange>> {
    if base_year >= later_year {
        return Err(VostatsError::InvalidYearRange {
            base: base_year,
            later: later_year,
        });
    }

    let base = tally(messages, rules, Some(base_year));
    let later = tally(messages, rules, Some(later_year));

    let later_counts: HashMap<&str, u64> = later
        .correct
        .iter()
        .map(|e| (e.sender.as_str(), e.count))
        .collect();

    let mut changes: Vec<SenderChange> = base
        .correct
        .iter()
        .map(|e| {
            let after = later_counts.get(e.sender.as_str()).copied().unwrap_or(0);
            SenderChange {
                sender: e.sender.clone(),
                percent: 100.0 * (after as f64 - e.count as f64) / e.count as f64,
            }
        })
        .collect();

    changes.sort_by(|a, b| {
        b.percent
            .partial_cmp(&a.percent)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.sender.cmp(&b.sender))
    });

    Ok(changes)
}

/// Sorted, deduplicated calendar years seen in the data.
pub fn years_present(messages: &[Message]) -> Vec<i32> {
    let mut years: Vec<i32> = messages.iter().map(Message::year).collect();
    years.sort_unstable();
    years.dedup();
    years
}

fn into_leaderboard(counts: HashMap<&str, u64>) -> Vec<SenderCount> {
    let mut board: Vec<SenderCount> = counts
        .into_iter()
        .map(|(sender, count)| SenderCount {
            sender: sender.to_string(),
            count,
        })
        .collect();

    board.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.sender.cmp(&b.sender)));
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn msg(year: i32, h: u32, mi: u32, sender: &str, content: &str) -> Message {
        let ts = NaiveDate::from_ymd_opt(year, 6, 1)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap();
        Message::new(ts, sender, content)
    }

    fn sample() -> Vec<Message> {
        vec![
            msg(2019, 12, 13, "Alice", "vo"),
            msg(2019, 12, 13, "Alice", "voo"),
            msg(2019, 12, 13, "Bob", "vo"),
            msg(2019, 12, 14, "Bob", "vo"),
            msg(2019, 12, 13, "Carol", "lunch?"),
            msg(2020, 12, 13, "Alice", "vo"),
            msg(2020, 12, 13, "Bob", "bravo"),
            msg(2020, 12, 13, "Bob", "vo"),
            msg(2020, 12, 12, "Alice", "Dit bericht is verwijderd"),
        ]
    }

    #[test]
    fn test_tally_year_scoped() {
        let board = tally(&sample(), &GameRules::new(), Some(2019));
        assert_eq!(board.correct.len(), 2);
        assert_eq!(board.correct[0].sender, "Alice");
        assert_eq!(board.correct[0].count, 2);
        assert_eq!(board.correct[1].sender, "Bob");
        assert_eq!(board.correct[1].count, 1);
        assert_eq!(board.incorrect.len(), 1);
        assert_eq!(board.incorrect[0].sender, "Bob");
    }

    #[test]
    fn test_tally_all_time() {
        let board = tally(&sample(), &GameRules::new(), None);
        assert_eq!(board.correct_total(), 6);
        assert_eq!(board.incorrect_total(), 2);
    }

    #[test]
    fn test_counts_sum_to_classified_messages() {
        let messages = sample();
        let rules = GameRules::new();
        let board = tally(&messages, &rules, None);

        let correct = messages
            .iter()
            .filter(|m| rules.classify(m) == Verdict::Correct)
            .count() as u64;
        let incorrect = messages
            .iter()
            .filter(|m| rules.classify(m) == Verdict::Incorrect)
            .count() as u64;

        assert_eq!(board.correct_total(), correct);
        assert_eq!(board.incorrect_total(), incorrect);
    }

    #[test]
    fn test_leaderboard_non_increasing_with_alphabetical_ties() {
        let messages = vec![
            msg(2020, 12, 13, "Zoe", "vo"),
            msg(2020, 12, 13, "Ann", "vo"),
            msg(2020, 12, 13, "Mia", "vo"),
            msg(2020, 12, 13, "Mia", "vo"),
        ];
        let board = tally(&messages, &GameRules::new(), None);
        assert_eq!(board.correct[0].sender, "Mia");
        // Tied at 1, alphabetical
        assert_eq!(board.correct[1].sender, "Ann");
        assert_eq!(board.correct[2].sender, "Zoe");
        for pair in board.correct.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn test_percent_change() {
        let changes = percent_change(&sample(), &GameRules::new(), 2019, 2020).unwrap();
        // Alice: 2 -> 1 = -50%; Bob: 1 -> 2 = +100%
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].sender, "Bob");
        assert!((changes[0].percent - 100.0).abs() < 1e-9);
        assert_eq!(changes[1].sender, "Alice");
        assert!((changes[1].percent + 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_change_skips_zero_baseline() {
        let messages = vec![
            msg(2019, 12, 13, "Alice", "vo"),
            // Dave only starts playing in 2020; no baseline to divide by.
            msg(2020, 12, 13, "Dave", "vo"),
        ];
        let changes = percent_change(&messages, &GameRules::new(), 2019, 2020).unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].sender, "Alice");
        assert!((changes[0].percent + 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_change_rejects_bad_range() {
        let err = percent_change(&sample(), &GameRules::new(), 2020, 2019).unwrap_err();
        assert!(matches!(err, VostatsError::InvalidYearRange { .. }));

        let err = percent_change(&sample(), &GameRules::new(), 2020, 2020).unwrap_err();
        assert!(matches!(err, VostatsError::InvalidYearRange { .. }));
    }

    #[test]
    fn test_years_present() {
        assert_eq!(years_present(&sample()), vec![2019, 2020]);
        assert!(years_present(&[]).is_empty());
    }

    #[test]
    fn test_empty_tally() {
        let board = tally(&[], &GameRules::new(), None);
        assert!(board.is_empty());
        assert_eq!(board.correct_total(), 0);
    }
}
