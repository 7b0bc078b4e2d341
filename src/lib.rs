//! # vostats
//!
//! Score and chart the daily "say the magic word at exactly the right
//! minute" game from a WhatsApp-style chat export.
//!
//! The export is a plain-text file with one message per line in the form
//! `DD-MM-YYYY HH:MM - Sender: content`. Each message is classified as
//! *correct* (keyword at the target minute), *incorrect* (keyword or a
//! deleted-message notice one minute off), or neither; per-sender counts
//! are aggregated into leaderboards and rendered as bar chart PNGs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vostats::classify::GameRules;
//! use vostats::parser::ExportParser;
//! use vostats::stats::tally;
//! use vostats::chart::render_counts;
//! use vostats::config::ChartStyle;
//!
//! fn main() -> vostats::Result<()> {
//!     let export = ExportParser::new().parse("export.txt".as_ref())?;
//!     let rules = GameRules::new();
//!
//!     let board = tally(&export.messages, &rules, Some(2020));
//!     render_counts(
//!         &board.correct,
//!         "Times 'vo' in 2020",
//!         "2020_correct.png".as_ref(),
//!         &ChartStyle::default(),
//!     )?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — export line parsing ([`parser::ExportParser`])
//! - [`message`] — the parsed record type ([`Message`])
//! - [`classify`] — keyword/time heuristics ([`classify::GameRules`], [`classify::Verdict`])
//! - [`stats`] — leaderboards and year-over-year change
//! - [`chart`] — plotters bar chart rendering
//! - [`config`] — parser and chart configuration
//! - [`cli`] — clap argument types
//! - [`error`] — unified error type ([`VostatsError`], [`Result`])

pub mod chart;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod message;
pub mod parser;
pub mod stats;

// Re-export the main types at the crate root for convenience
pub use error::{Result, VostatsError};
pub use message::Message;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::Message;
    pub use crate::chart::{render_change, render_counts};
    pub use crate::classify::{GameRules, Verdict};
    pub use crate::config::{ChartStyle, ParserConfig};
    pub use crate::error::{Result, VostatsError};
    pub use crate::parser::{ExportParser, ParsedExport};
    pub use crate::stats::{SenderChange, SenderCount, Tally, percent_change, tally, years_present};
}
