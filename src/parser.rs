//! Chat export line parser.
//!
//! The export is a UTF-8 text file with one message per line:
//!
//! ```text
//! 26-03-2016 12:13 - Alice: vo
//! ```
//!
//! i.e. `DD-MM-YYYY HH:MM - Sender: content`. The sender runs up to the
//! first colon after the ` - ` delimiter; everything after that colon is
//! content and is preserved verbatim, including further colons.
//!
//! Lines that do not match (export headers, system notices, garbage) are
//! skipped and counted in [`ParsedExport::skipped`]. Strict mode turns the
//! first mismatch into [`VostatsError::MalformedLine`] instead.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::Message;
use crate::config::ParserConfig;
use crate::error::{Result, VostatsError};

/// `DD-MM-YYYY HH:MM - Sender: content`
const LINE_PATTERN: &str = r"^(\d{2}-\d{2}-\d{4} \d{2}:\d{2}) - ([^:]+):\s?(.*)$";

/// chrono format matching the timestamp half of [`LINE_PATTERN`].
const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Result of parsing one export file.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExport {
    /// Messages, in file order.
    pub messages: Vec<Message>,

    /// Number of non-empty lines that did not match the export format.
    pub skipped: usize,
}

impl ParsedExport {
    /// Fraction of non-empty lines that parsed, 0.0 - 100.0.
    pub fn parse_rate(&self) -> f64 {
        let total = self.messages.len() + self.skipped;
        if total == 0 {
            return 0.0;
        }
        100.0 * self.messages.len() as f64 / total as f64
    }
}

/// Parser for `DD-MM-YYYY HH:MM - Sender: content` exports.
///
/// # Example
///
/// ```rust,no_run
/// use vostats::parser::ExportParser;
///
/// let parser = ExportParser::new();
/// let export = parser.parse("export.txt".as_ref())?;
/// println!("{} messages, {} lines skipped", export.messages.len(), export.skipped);
/// # Ok::<(), vostats::VostatsError>(())
/// ```
pub struct ExportParser {
    config: ParserConfig,
    regex: Regex,
}

impl ExportParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            // Pattern is a compile-time constant, cannot fail.
            regex: Regex::new(LINE_PATTERN).expect("valid line pattern"),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses an export file.
    ///
    /// # Errors
    ///
    /// Returns [`VostatsError::Io`] if the file cannot be read,
    /// [`VostatsError::InvalidFormat`] if no line in the file parses, and
    /// in strict mode [`VostatsError::MalformedLine`] on the first
    /// mismatching line.
    pub fn parse(&self, path: &Path) -> Result<ParsedExport> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parses export content from a string.
    pub fn parse_str(&self, content: &str) -> Result<ParsedExport> {
        let mut messages = Vec::new();
        let mut skipped = 0usize;

        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match self.parse_line(line) {
                Some(msg) => messages.push(msg),
                None => {
                    if self.config.strict {
                        return Err(VostatsError::malformed_line(
                            idx + 1,
                            format!("expected 'DD-MM-YYYY HH:MM - Sender: content', got {line:?}"),
                        ));
                    }
                    skipped += 1;
                }
            }
        }

        if messages.is_empty() && skipped > 0 {
            return Err(VostatsError::invalid_format(format!(
                "none of {skipped} non-empty lines matched the export format"
            )));
        }

        Ok(ParsedExport { messages, skipped })
    }

    /// Parses a single line, or `None` if it does not match.
    fn parse_line(&self, line: &str) -> Option<Message> {
        let caps = self.regex.captures(line)?;

        let ts_str = caps.get(1).map_or("", |m| m.as_str());
        let sender = caps.get(2).map_or("", |m| m.as_str().trim());
        let content = caps.get(3).map_or("", |m| m.as_str());

        // A date like 31-02-2020 matches the regex but is not a real
        // timestamp; treat the line as malformed.
        let timestamp = NaiveDateTime::parse_from_str(ts_str, TIMESTAMP_FORMAT).ok()?;

        if sender.is_empty() {
            return None;
        }

        Some(Message::new(timestamp, sender, content))
    }
}

impl Default for ExportParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_line() {
        let parser = ExportParser::new();
        let export = parser
            .parse_str("26-03-2016 12:13 - Alice: vo")
            .unwrap();
        assert_eq!(export.messages.len(), 1);
        assert_eq!(export.skipped, 0);

        let msg = &export.messages[0];
        assert_eq!(msg.sender, "Alice");
        assert_eq!(msg.content, "vo");
        assert_eq!(msg.year(), 2016);
        assert_eq!(msg.hour(), 12);
        assert_eq!(msg.minute(), 13);
    }

    #[test]
    fn test_content_keeps_colons() {
        let parser = ExportParser::new();
        let export = parser
            .parse_str("01-01-2020 12:13 - Bob: vo om 12:13 natuurlijk")
            .unwrap();
        assert_eq!(export.messages[0].content, "vo om 12:13 natuurlijk");
    }

    #[test]
    fn test_malformed_lines_skipped_and_counted() {
        let input = "\
26-03-2016 12:13 - Alice: vo
this line is garbage
2016-03-26 12:13 - Bob: wrong date order
26-03-2016 12:14 - Bob: vo";
        let parser = ExportParser::new();
        let export = parser.parse_str(input).unwrap();
        assert_eq!(export.messages.len(), 2);
        assert_eq!(export.skipped, 2);
    }

    #[test]
    fn test_empty_lines_not_counted_as_skipped() {
        let input = "26-03-2016 12:13 - Alice: vo\n\n\n26-03-2016 12:14 - Bob: vo\n";
        let parser = ExportParser::new();
        let export = parser.parse_str(input).unwrap();
        assert_eq!(export.messages.len(), 2);
        assert_eq!(export.skipped, 0);
    }

    #[test]
    fn test_impossible_date_is_malformed() {
        let parser = ExportParser::new();
        let export = parser
            .parse_str("31-02-2020 12:13 - Alice: vo\n26-03-2016 12:13 - Bob: vo")
            .unwrap();
        assert_eq!(export.messages.len(), 1);
        assert_eq!(export.skipped, 1);
    }

    #[test]
    fn test_strict_mode_errors_with_line_number() {
        let input = "26-03-2016 12:13 - Alice: vo\nnot a message";
        let parser = ExportParser::with_config(ParserConfig::new().with_strict(true));
        let err = parser.parse_str(input).unwrap_err();
        match err {
            VostatsError::MalformedLine { line, .. } => assert_eq!(line, 2),
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn test_nothing_parses_is_invalid_format() {
        let parser = ExportParser::new();
        let err = parser.parse_str("hello\nworld").unwrap_err();
        assert!(matches!(err, VostatsError::InvalidFormat { .. }));
    }

    #[test]
    fn test_empty_input_is_ok_and_empty() {
        let parser = ExportParser::new();
        let export = parser.parse_str("").unwrap();
        assert!(export.messages.is_empty());
        assert_eq!(export.skipped, 0);
    }

    #[test]
    fn test_empty_content_allowed() {
        let parser = ExportParser::new();
        let export = parser.parse_str("26-03-2016 12:13 - Alice:").unwrap();
        assert_eq!(export.messages.len(), 1);
        assert!(export.messages[0].content.is_empty());
    }

    #[test]
    fn test_parse_rate() {
        let parser = ExportParser::new();
        let export = parser
            .parse_str("26-03-2016 12:13 - Alice: vo\ngarbage")
            .unwrap();
        assert!((export.parse_rate() - 50.0).abs() < f64::EPSILON);
    }
}
