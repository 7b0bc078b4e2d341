//! # vostats CLI
//!
//! Parses a chat export, scores the 'vo' game, and writes leaderboard
//! charts as PNG files.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use vostats::chart::{
    change_chart_filename, count_chart_filename, render_change, render_counts,
};
use vostats::classify::GameRules;
use vostats::cli::Args;
use vostats::config::{ChartStyle, ParserConfig};
use vostats::parser::ExportParser;
use vostats::stats::{Tally, percent_change, tally, years_present};
use vostats::{Message, VostatsError};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), VostatsError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let mut rules = GameRules::new().with_target(args.hour, args.minute);
    if !args.keywords.is_empty() {
        rules = rules.with_keywords(&args.keywords);
    }

    println!("📊 vostats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:    {}", args.input);
    println!("💾 Out dir:  {}", args.out_dir);
    println!(
        "🎯 Target:   {:02}:{:02} ('{}')",
        rules.hour(),
        rules.minute(),
        rules.primary_keyword()
    );
    println!();

    // Step 1: parse
    println!("⏳ Parsing export...");
    let parse_start = Instant::now();
    let parser = ExportParser::with_config(ParserConfig::new().with_strict(args.strict));
    let export = parser.parse(Path::new(&args.input))?;
    println!(
        "   Found {} messages, skipped {} lines ({:.2}s)",
        export.messages.len(),
        export.skipped,
        parse_start.elapsed().as_secs_f64()
    );

    let out_dir = PathBuf::from(&args.out_dir);
    fs::create_dir_all(&out_dir)?;

    // Step 2: pick what to chart
    let (years, all_time) = if args.wants_default_selection() {
        (years_present(&export.messages), true)
    } else {
        (args.years.clone(), args.all_time)
    };

    let style = ChartStyle::default();
    let mut written = 0usize;

    // Step 3: per-year and all-time leaderboards
    for year in &years {
        let board = tally(&export.messages, &rules, Some(*year));
        written += write_tally_charts(&board, &rules, Some(*year), &out_dir, &style)?;
    }

    if all_time {
        let board = tally(&export.messages, &rules, None);
        written += write_tally_charts(&board, &rules, None, &out_dir, &style)?;
    }

    // Step 4: year-over-year change
    if let Some(diff) = &args.diff {
        let (base, later) = (diff[0], diff[1]);
        let changes = percent_change(&export.messages, &rules, base, later)?;
        let title = format!("Percent change between {base} and {later}");
        let path = out_dir.join(change_chart_filename(base, later));
        if changes.is_empty() {
            println!("⏭️  No baseline data for {base}, skipping {}", path.display());
        } else {
            render_change(&changes, &title, &path, &style)?;
            println!("🖼️  Wrote {}", path.display());
            written += 1;
        }
    }

    // Summary
    println!();
    println!("✅ Done! {} chart(s) written to {}", written, out_dir.display());
    print_scoreboard(&export.messages, &rules);
    println!();
    println!(
        "⚡ Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Renders the correct and incorrect charts for one scope, skipping
/// empty leaderboards with a notice. Returns how many files were written.
fn write_tally_charts(
    board: &Tally,
    rules: &GameRules,
    year: Option<i32>,
    out_dir: &Path,
    style: &ChartStyle,
) -> Result<usize, VostatsError> {
    let scope = year.map_or_else(|| "all time".to_string(), |y| y.to_string());
    let kw = rules.primary_keyword();
    let near = rules
        .near_minutes()
        .iter()
        .map(|m| format!("{:02}:{:02}", rules.hour(), m))
        .collect::<Vec<_>>()
        .join(" or ");

    let mut written = 0usize;

    let correct_path = out_dir.join(count_chart_filename(year, true));
    if board.correct.is_empty() {
        println!("⏭️  No correct messages in {scope}, skipping {}", correct_path.display());
    } else {
        let title = format!("Times '{kw}' in {scope}");
        render_counts(&board.correct, &title, &correct_path, style)?;
        println!("🖼️  Wrote {}", correct_path.display());
        written += 1;
    }

    let incorrect_path = out_dir.join(count_chart_filename(year, false));
    if board.incorrect.is_empty() {
        println!(
            "⏭️  No incorrect messages in {scope}, skipping {}",
            incorrect_path.display()
        );
    } else {
        let title = format!("Times '{kw}' at {near} in {scope}");
        render_counts(&board.incorrect, &title, &incorrect_path, style)?;
        println!("🖼️  Wrote {}", incorrect_path.display());
        written += 1;
    }

    Ok(written)
}

/// Prints the all-time top senders to the terminal.
fn print_scoreboard(messages: &[Message], rules: &GameRules) {
    let board = tally(messages, rules, None);
    if board.correct.is_empty() {
        return;
    }

    println!();
    println!("🏆 All-time top senders:");
    for entry in board.correct.iter().take(5) {
        println!("   {:>5}  {}", entry.count, entry.sender);
    }
}
