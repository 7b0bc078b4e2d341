//! Command-line interface definition using clap.

use clap::Parser;

/// Score the daily 'vo' game from a WhatsApp-style chat export and
/// render per-sender leaderboard charts.
#[derive(Parser, Debug, Clone)]
#[command(name = "vostats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    vostats export.txt
    vostats export.txt --year 2019 --year 2020 --diff 2019 2020
    vostats export.txt --all-time -o charts/
    vostats export.txt --keyword elf --hour 11 --minute 11
    vostats export.txt --strict")]
pub struct Args {
    /// Path to the chat export (one message per line,
    /// `DD-MM-YYYY HH:MM - Sender: content`)
    pub input: String,

    /// Chart a specific year (repeatable). Without any selection flags,
    /// every year present in the data is charted plus the all-time pair.
    #[arg(short = 'y', long = "year", value_name = "YEAR")]
    pub years: Vec<i32>,

    /// Chart all-time counts
    #[arg(long)]
    pub all_time: bool,

    /// Chart the percent change in correct count between two years
    #[arg(long, num_args = 2, value_names = ["BASE", "LATER"])]
    pub diff: Option<Vec<i32>>,

    /// Directory to write PNG files into
    #[arg(short = 'o', long, default_value = ".", value_name = "DIR")]
    pub out_dir: String,

    /// Override the keyword list (repeatable)
    #[arg(short = 'k', long = "keyword", value_name = "WORD")]
    pub keywords: Vec<String>,

    /// Target hour of the game (0-23)
    #[arg(long, default_value_t = 12)]
    pub hour: u32,

    /// Target minute of the game (0-59)
    #[arg(long, default_value_t = 13)]
    pub minute: u32,

    /// Fail on the first malformed line instead of skipping it
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    /// Returns `true` when no chart selection flag was given and the
    /// default selection (all years present + all-time) should apply.
    pub fn wants_default_selection(&self) -> bool {
        self.years.is_empty() && !self.all_time && self.diff.is_none()
    }
}
